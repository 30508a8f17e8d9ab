/// Game tuning parameters for Pong
///
/// Velocities and paddle speeds are expressed in field units per nominal
/// 60 Hz frame; the controller scales them by elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    pub const MIN_FIELD_SIZE: f32 = 50.0; // Smallest accepted width or height

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side wall
    pub const PLAYER_PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_SMOOTHING: f32 = 0.2; // Fraction of remaining distance per frame

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply vx on paddle hit
    pub const HIT_ANGLE_SPEED: f32 = 6.0; // vy at the very edge of a paddle

    // Serve
    pub const SERVE_SPEED_LIMIT: f32 = 10.0; // Above this, vx resets on serve
    pub const SERVE_SPEED_RESET: f32 = 5.0;
    pub const SERVE_VY_MAX: f32 = 5.0;

    // Computer opponent
    pub const AI_NOISE: f32 = 50.0; // Half-width of the random target offset

    // Score
    pub const WIN_SCORE: u32 = 10;
    pub const SCORE_FLASH_SECS: f32 = 0.5;

    // Timing
    pub const NOMINAL_HZ: f32 = 60.0;
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
