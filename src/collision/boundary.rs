use super::CollisionError;
use crate::objects::PhysicsObject;
use crate::shapes::Shape;

/// Vertical speed below which a body on the floor counts as resting.
pub const RESTING_SPEED_THRESHOLD: f64 = 10.0;
/// Horizontal velocity multiplier applied to resting bodies.
pub const RESTING_FRICTION: f64 = 0.95;

/// Keeps a circle inside `[r, width - r] x [r, height - r]`.
///
/// Each clamped axis reflects that velocity component scaled by the body's
/// restitution. Hitting the floor (largest y) with little vertical speed left
/// also bleeds horizontal speed so bodies settle. Returns whether any wall was
/// hit. Static bodies are ignored; boxes are not supported.
pub fn resolve_boundary(
    body: &mut PhysicsObject,
    width: f64,
    height: f64,
) -> Result<bool, CollisionError> {
    if body.is_static {
        return Ok(false);
    }

    let radius = match body.shape {
        Shape::Circle(circle) => circle.radius,
        Shape::Box(_) => return Err(CollisionError::UnsupportedBoundary(body.shape.kind())),
    };

    let restitution = body.material.restitution;
    let mut hit = false;

    // Left
    if body.position.x - radius < 0.0 {
        body.position.x = radius;
        body.velocity.x *= -restitution;
        hit = true;
    }
    // Right
    if body.position.x + radius > width {
        body.position.x = width - radius;
        body.velocity.x *= -restitution;
        hit = true;
    }
    // Top
    if body.position.y - radius < 0.0 {
        body.position.y = radius;
        body.velocity.y *= -restitution;
        hit = true;
    }
    // Bottom
    if body.position.y + radius > height {
        body.position.y = height - radius;
        body.velocity.y *= -restitution;
        if body.velocity.y.abs() < RESTING_SPEED_THRESHOLD {
            body.velocity.x *= RESTING_FRICTION;
        }
        hit = true;
    }

    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;

    fn ball(x: f64, y: f64, v: Vec2) -> PhysicsObject {
        PhysicsObject::new(Vec2::new(x, y), 1.0).with_velocity(v).with_restitution(0.5)
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut body = ball(100.0, 100.0, Vec2::new(5.0, 5.0));
        assert_eq!(resolve_boundary(&mut body, 800.0, 600.0), Ok(false));
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
        assert_eq!(body.velocity, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_left_wall_reflects_x() {
        let mut body = ball(5.0, 100.0, Vec2::new(-40.0, 3.0));
        assert_eq!(resolve_boundary(&mut body, 800.0, 600.0), Ok(true));
        assert_eq!(body.position.x, 20.0);
        assert_relative_eq!(body.velocity.x, 20.0);
        assert_eq!(body.velocity.y, 3.0);
    }

    #[test]
    fn test_right_and_top_walls() {
        let mut body = ball(795.0, 2.0, Vec2::new(40.0, -40.0));
        assert_eq!(resolve_boundary(&mut body, 800.0, 600.0), Ok(true));
        assert_eq!(body.position, Vec2::new(780.0, 20.0));
        assert_relative_eq!(body.velocity.x, -20.0);
        assert_relative_eq!(body.velocity.y, 20.0);
    }

    #[test]
    fn test_floor_fast_bounce_keeps_horizontal_speed() {
        let mut body = ball(100.0, 595.0, Vec2::new(30.0, 100.0));
        resolve_boundary(&mut body, 800.0, 600.0).expect("circle");
        assert_eq!(body.position.y, 580.0);
        assert_relative_eq!(body.velocity.y, -50.0);
        assert_eq!(body.velocity.x, 30.0);
    }

    #[test]
    fn test_floor_resting_friction() {
        let mut body = ball(100.0, 595.0, Vec2::new(30.0, 10.0));
        resolve_boundary(&mut body, 800.0, 600.0).expect("circle");
        assert_relative_eq!(body.velocity.y, -5.0);
        assert_relative_eq!(body.velocity.x, 30.0 * RESTING_FRICTION);
    }

    #[test]
    fn test_static_body_ignored() {
        let mut body = ball(-50.0, -50.0, Vec2::ZERO).into_static();
        assert_eq!(resolve_boundary(&mut body, 800.0, 600.0), Ok(false));
        assert_eq!(body.position, Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn test_box_is_unsupported() {
        let mut body = ball(-50.0, -50.0, Vec2::ZERO).with_shape(Shape::rect(10.0, 10.0));
        assert!(resolve_boundary(&mut body, 800.0, 600.0).is_err());
        assert_eq!(body.position, Vec2::new(-50.0, -50.0));
    }
}
