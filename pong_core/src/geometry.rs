use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Circle test approximated as a square of half-extent `radius`
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        self.intersects(&Aabb::from_center_size(center, Vec2::splat(radius * 2.0)))
    }
}

/// Playing field. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of a box of `extent` height inside the field
    pub fn clamp_top(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }

    /// Per-axis factor that maps positions in `self` onto `other`
    pub fn scale_to(&self, other: &Field) -> Vec2 {
        Vec2::new(other.width / self.width, other.height / self.height)
    }
}
