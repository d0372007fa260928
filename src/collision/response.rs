use super::manifold::CollisionManifold;
use crate::objects::PhysicsObject;

/// Below this combined inverse mass no positional correction is applied.
pub const MIN_TOTAL_INVERSE_MASS: f64 = 1e-4;

/// Separates two overlapping bodies and applies a single restitution impulse
/// along the manifold normal.
///
/// Positional correction removes the whole overlap in one go, split in
/// proportion to inverse mass, so static bodies never move. The impulse is
/// skipped when the bodies are already separating.
pub fn resolve_contact(a: &mut PhysicsObject, b: &mut PhysicsObject, manifold: &CollisionManifold) {
    let normal = manifold.normal;
    let inv_mass_a = a.inverse_mass();
    let inv_mass_b = b.inverse_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;

    if manifold.depth > 0.0 && total_inv_mass > MIN_TOTAL_INVERSE_MASS {
        let separation = normal * (manifold.depth / total_inv_mass);
        a.position -= separation * inv_mass_a;
        b.position += separation * inv_mass_b;
    }

    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);

    // Both static: nothing can take the impulse.
    if velocity_along_normal > 0.0 || total_inv_mass == 0.0 {
        return;
    }

    let e = a.material.restitution.min(b.material.restitution);
    let j = -(1.0 + e) * velocity_along_normal / total_inv_mass;

    let impulse = normal * j;
    a.velocity -= impulse * inv_mass_a;
    b.velocity += impulse * inv_mass_b;
}

/// Mutable references to two distinct bodies of a slice.
/// Panics if the indices are equal or out of bounds.
pub(crate) fn body_pair_mut(
    bodies: &mut [PhysicsObject],
    idx_a: usize,
    idx_b: usize,
) -> (&mut PhysicsObject, &mut PhysicsObject) {
    assert_ne!(idx_a, idx_b, "a body cannot collide with itself");

    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        (&mut slice_a[idx_a], &mut slice_b[0])
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        (&mut slice_a[0], &mut slice_b[idx_b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::check_collision;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;

    fn ball(x: f64, vx: f64) -> PhysicsObject {
        PhysicsObject::new(Vec2::new(x, 0.0), 1.0)
            .with_velocity(Vec2::new(vx, 0.0))
            .with_restitution(1.0)
    }

    fn resolve(a: &mut PhysicsObject, b: &mut PhysicsObject) {
        let manifold = check_collision(a, 0, b, 1).ok().flatten().expect("bodies overlap");
        resolve_contact(a, b, &manifold);
    }

    #[test]
    fn test_equal_mass_elastic_swap() {
        let mut a = ball(0.0, 100.0);
        let mut b = ball(30.0, -100.0);
        resolve(&mut a, &mut b);
        assert_relative_eq!(a.velocity.x, -100.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.x, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overlap_is_removed_in_proportion_to_inverse_mass() {
        let mut a = ball(0.0, 0.0);
        let mut b = PhysicsObject::new(Vec2::new(30.0, 0.0), 3.0).with_restitution(1.0);
        resolve(&mut a, &mut b);

        // overlap 10, inverse masses 1 and 1/3
        assert_relative_eq!(a.position.x, -7.5, epsilon = 1e-9);
        assert_relative_eq!(b.position.x, 32.5, epsilon = 1e-9);
        assert_relative_eq!(Vec2::distance(a.position, b.position), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_static_partner_does_not_move() {
        let mut wall = ball(0.0, 0.0).into_static();
        let mut b = ball(30.0, -50.0);
        resolve(&mut wall, &mut b);

        assert_eq!(wall.position, Vec2::ZERO);
        assert_eq!(wall.velocity, Vec2::ZERO);
        assert_relative_eq!(b.position.x, 40.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.x, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_static_bodies_are_left_alone() {
        let mut a = ball(0.0, 0.0).into_static();
        let mut b = ball(30.0, 0.0).into_static();
        let (before_a, before_b) = (a.clone(), b.clone());
        resolve(&mut a, &mut b);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn test_heavy_bodies_still_bounce() {
        // Inverse masses sum below the correction threshold.
        let heavy = |x: f64, vx: f64| {
            PhysicsObject::new(Vec2::new(x, 0.0), 30_000.0)
                .with_velocity(Vec2::new(vx, 0.0))
                .with_restitution(1.0)
        };
        let mut a = heavy(0.0, 100.0);
        let mut b = heavy(30.0, -100.0);
        resolve(&mut a, &mut b);

        assert_relative_eq!(a.velocity.x, -100.0, epsilon = 1e-6);
        assert_relative_eq!(b.velocity.x, 100.0, epsilon = 1e-6);
        // No positional correction for such a pair.
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 30.0);
    }

    #[test]
    fn test_separating_bodies_keep_their_velocity() {
        let mut a = ball(0.0, -10.0);
        let mut b = ball(30.0, 10.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.velocity.x, -10.0);
        assert_eq!(b.velocity.x, 10.0);
        // Overlap is still corrected.
        assert_relative_eq!(b.position.x - a.position.x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_restitution_uses_minimum() {
        let mut a = ball(0.0, 100.0).with_restitution(0.0);
        let mut b = ball(30.0, -100.0);
        resolve(&mut a, &mut b);
        // Perfectly inelastic: both end with the common velocity.
        assert_relative_eq!(a.velocity.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_body_pair_mut_either_order() {
        let mut bodies = vec![ball(0.0, 0.0), ball(1.0, 0.0), ball(2.0, 0.0)];
        let (a, b) = body_pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.position.x, 2.0);
        assert_eq!(b.position.x, 0.0);
    }
}
