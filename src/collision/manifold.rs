use crate::math::vec2::Vec2;

/// Stores information about a contact between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// Unit normal pointing from body A towards body B.
    /// Zero when the centers coincide.
    pub normal: Vec2,
    /// How far the shapes overlap along the normal.
    pub depth: f64,
    /// Distance between the two centers at detection time.
    pub distance: f64,
}
