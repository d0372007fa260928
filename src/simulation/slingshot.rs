use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

/// Launch speed per pixel of pull.
pub const LAUNCH_SCALE: f64 = 3.0;
pub const TRAJECTORY_POINTS: usize = 50;
pub const TRAJECTORY_DT: f64 = 0.05;

/// A body being pulled back for launch.
///
/// The body stays pinned at `anchor` while the pointer moves; its velocity
/// follows the pull so releasing simply lets the next step carry it away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slingshot {
    pub body: BodyHandle,
    pub anchor: Vec2,
}

impl Slingshot {
    pub fn new(body: BodyHandle, anchor: Vec2) -> Self {
        Self { body, anchor }
    }

    /// Launch velocity for a pointer at `pointer`, opposite to the pull.
    pub fn launch_velocity(&self, pointer: Vec2) -> Vec2 {
        (self.anchor - pointer) * LAUNCH_SCALE
    }
}

/// Ballistic preview under constant `gravity`.
///
/// Steps velocity then position at a coarse fixed dt and stops once the path
/// leaves the world horizontally or drops below the floor.
pub fn predict_trajectory(start: Vec2, velocity: Vec2, gravity: Vec2, width: f64, height: f64) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(TRAJECTORY_POINTS);
    let mut position = start;
    let mut velocity = velocity;

    for _ in 0..TRAJECTORY_POINTS {
        points.push(position);

        velocity += gravity * TRAJECTORY_DT;
        position += velocity * TRAJECTORY_DT;

        if position.x < 0.0 || position.x > width || position.y > height {
            break;
        }
    }
    points
}
