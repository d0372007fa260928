use super::manifold::CollisionManifold;
use super::CollisionError;
use crate::math::vec2::Vec2;
use crate::objects::PhysicsObject;
use crate::shapes::{Circle, Shape};

/// Checks for overlap between two circles.
/// Returns a manifold if the center distance is below the sum of radii.
pub fn check_circle_circle(
    body_a: &PhysicsObject,
    circle_a: &Circle,
    body_a_idx: usize,
    body_b: &PhysicsObject,
    circle_b: &Circle,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let distance = Vec2::distance(body_a.position, body_b.position);
    let radii_sum = circle_a.radius + circle_b.radius;

    if distance < radii_sum {
        Some(CollisionManifold {
            body_a_idx,
            body_b_idx,
            normal: (body_b.position - body_a.position).normalize(),
            depth: radii_sum - distance,
            distance,
        })
    } else {
        None
    }
}

/// Dispatches on the shape pair of two bodies.
///
/// Only circle-circle contacts are implemented. Every pair that involves a box
/// reports [`CollisionError::UnsupportedShapePair`] so callers can decide to
/// skip it.
pub fn check_collision(
    body_a: &PhysicsObject,
    body_a_idx: usize,
    body_b: &PhysicsObject,
    body_b_idx: usize,
) -> Result<Option<CollisionManifold>, CollisionError> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => Ok(check_circle_circle(
            body_a, circle_a, body_a_idx, body_b, circle_b, body_b_idx,
        )),
        (Shape::Circle(_), Shape::Box(_))
        | (Shape::Box(_), Shape::Circle(_))
        | (Shape::Box(_), Shape::Box(_)) => Err(CollisionError::UnsupportedShapePair {
            a: body_a.shape.kind(),
            b: body_b.shape.kind(),
        }),
    }
}
