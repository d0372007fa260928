use crate::common::{Appearance, Color, Material};
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// One simulated body.
///
/// Bodies are built by the caller and handed to the engine, which owns them
/// from then on. `previous_position` is refreshed on every integration step
/// whatever the active integrator, so switching methods mid-run stays
/// consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsObject {
    // Kinematic state
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub previous_position: Vec2,

    // Mass and geometry
    pub mass: f64,
    pub shape: Shape,

    pub material: Material,
    /// Static bodies have infinite mass and ignore forces and integration.
    pub is_static: bool,

    // Force accumulator for the current step
    pub force: Vec2,

    pub appearance: Appearance,
}

impl PhysicsObject {
    /// Creates a dynamic circle of radius 20 at `position`.
    pub fn new(position: Vec2, mass: f64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            previous_position: position,
            mass,
            shape: Shape::default(),
            material: Material::default(),
            is_static: false,
            force: Vec2::ZERO,
            appearance: Appearance::default(),
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_radius(self, radius: f64) -> Self {
        self.with_shape(Shape::circle(radius))
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.material.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.material.friction = friction.max(0.0);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.appearance.color = color;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.appearance.label = Some(label.into());
        self
    }

    /// Marks the body as immovable.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Adds a force to the accumulator for the current step.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Resets the force accumulator. Called once per integration step.
    pub fn clear_forces(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// 1/mass, or 0 for static bodies (infinite mass).
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        if self.is_static {
            return 0.0;
        }
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Potential energy in screen space, where y grows downwards.
    pub fn potential_energy(&self, gravity: f64) -> f64 {
        if self.is_static {
            return 0.0;
        }
        self.mass * gravity * self.position.y
    }

    /// Circle radius, or `None` for non-circular shapes.
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle(circle) => Some(circle.radius),
            Shape::Box(_) => None,
        }
    }

    /// Whether `point` lies strictly inside this body. Boxes are never hit.
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self.shape {
            Shape::Circle(circle) => Vec2::distance(point, self.position) < circle.radius,
            Shape::Box(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_defaults() {
        let body = PhysicsObject::new(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(body.position, Vec2::new(10.0, 20.0));
        assert_eq!(body.previous_position, body.position);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.radius(), Some(20.0));
        assert_eq!(body.material.restitution, 0.8);
        assert_eq!(body.material.friction, 0.1);
        assert!(!body.is_static);
        assert_eq!(body.appearance.color, Color::SKY);
        assert!(body.appearance.label.is_none());
    }

    #[test]
    fn test_add_and_clear_forces() {
        let mut body = PhysicsObject::new(Vec2::ZERO, 1.0);
        body.add_force(Vec2::new(1.0, 2.0));
        body.add_force(Vec2::new(3.0, -1.0));
        assert_eq!(body.force, Vec2::new(4.0, 1.0));
        body.clear_forces();
        assert_eq!(body.force, Vec2::ZERO);
    }

    #[test]
    fn test_inverse_mass() {
        let body = PhysicsObject::new(Vec2::ZERO, 4.0);
        assert_relative_eq!(body.inverse_mass(), 0.25);
        let anchor = PhysicsObject::new(Vec2::ZERO, 4.0).into_static();
        assert_eq!(anchor.inverse_mass(), 0.0);
    }

    #[test]
    fn test_energies() {
        let body = PhysicsObject::new(Vec2::new(0.0, 100.0), 2.0).with_velocity(Vec2::new(3.0, 4.0));
        assert_relative_eq!(body.kinetic_energy(), 25.0);
        assert_relative_eq!(body.potential_energy(980.0), 2.0 * 980.0 * 100.0);
    }

    #[test]
    fn test_static_energies_are_zero() {
        let body = PhysicsObject::new(Vec2::new(0.0, 100.0), 2.0)
            .with_velocity(Vec2::new(3.0, 4.0))
            .into_static();
        assert_eq!(body.kinetic_energy(), 0.0);
        assert_eq!(body.potential_energy(980.0), 0.0);
    }

    #[test]
    fn test_box_has_no_radius_and_is_never_hit() {
        let body = PhysicsObject::new(Vec2::ZERO, 1.0).with_shape(Shape::rect(40.0, 40.0));
        assert_eq!(body.radius(), None);
        assert!(!body.contains_point(Vec2::ZERO));
    }

    #[test]
    fn test_contains_point() {
        let body = PhysicsObject::new(Vec2::new(50.0, 50.0), 1.0);
        assert!(body.contains_point(Vec2::new(60.0, 50.0)));
        assert!(!body.contains_point(Vec2::new(70.0, 50.0)));
    }

    #[test]
    fn test_builder_clamps_material() {
        let body = PhysicsObject::new(Vec2::ZERO, 1.0)
            .with_restitution(2.0)
            .with_friction(-1.0)
            .with_label("ball");
        assert_eq!(body.material.restitution, 1.0);
        assert_eq!(body.material.friction, 0.0);
        assert_eq!(body.appearance.label.as_deref(), Some("ball"));
    }
}
