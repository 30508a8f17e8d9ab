use crate::court::Court;
use crate::paddle::Owner;
use crate::resources::{Events, GameEvent, GameRng, Score};

/// Award a point when the ball leaves through a side wall, then re-serve.
///
/// Returns the scorer and their new total. Win detection is left to the caller.
pub fn check_scoring(
    court: &mut Court,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<(Owner, u32)> {
    let scorer = if court.ball.pos.x < 0.0 {
        Owner::Ai
    } else if court.ball.pos.x > court.field.width {
        Owner::Player
    } else {
        return None;
    };

    let total = score.increment(scorer);
    events.push(GameEvent::Score(scorer));
    tracing::info!(?scorer, player = score.player, ai = score.ai, total, "point scored");

    court.ball.serve(court.field.center(), rng);
    Some((scorer, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::geometry::Field;
    use glam::Vec2;

    fn setup() -> (Court, Score, Events, GameRng) {
        let court = Court::new(Field::new(800.0, 500.0), 1.0, &Difficulty::default());
        (court, Score::new(), Events::new(), GameRng::new(12345))
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut court, mut score, mut events, mut rng) = setup();
        court.ball.pos = Vec2::new(-0.1, 250.0);
        court.ball.vel = Vec2::new(-8.0, 0.0);

        assert_eq!(
            check_scoring(&mut court, &mut score, &mut events, &mut rng),
            Some((Owner::Ai, 1))
        );

        assert_eq!(score.ai, 1, "AI should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.contains(GameEvent::Score(Owner::Ai)));
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut court, mut score, mut events, mut rng) = setup();
        court.ball.pos = Vec2::new(800.1, 250.0);
        court.ball.vel = Vec2::new(8.0, 0.0);
        score.ai = 6;

        let scored = check_scoring(&mut court, &mut score, &mut events, &mut rng);

        assert_eq!(scored, Some((Owner::Player, 1)), "Total is the scorer's own");
        assert_eq!(score.player, 1);
        assert_eq!(score.ai, 6);
        assert!(events.contains(GameEvent::Score(Owner::Player)));
    }

    #[test]
    fn test_ball_reserved_after_scoring() {
        let (mut court, mut score, mut events, mut rng) = setup();
        court.ball.pos = Vec2::new(-0.1, 12.0);
        court.ball.vel = Vec2::new(-12.0, 3.0);

        check_scoring(&mut court, &mut score, &mut events, &mut rng);

        assert_eq!(court.ball.pos, Vec2::new(400.0, 250.0), "Ball should return to center");
        assert_eq!(court.ball.vel.x, 5.0, "Fast rally speed resets and flips");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut court, mut score, mut events, mut rng) = setup();
        court.ball.pos = Vec2::new(0.0, 250.0);

        assert_eq!(check_scoring(&mut court, &mut score, &mut events, &mut rng), None);

        assert_eq!(score, Score::new());
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut court, mut score, mut events, mut rng) = setup();
        for _ in 0..2 {
            court.ball.pos = Vec2::new(801.0, 250.0);
            check_scoring(&mut court, &mut score, &mut events, &mut rng);
        }
        assert_eq!(score.player, 2, "Scores should accumulate");
        assert_eq!(score.ai, 0);
    }
}
