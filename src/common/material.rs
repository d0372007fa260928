//! Defines physical material properties.

use serde::{Deserialize, Serialize};

/// Surface properties that drive collision response and damping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
    /// Linear velocity damping coefficient. Range [0, infinity).
    /// Produces a force of `-friction * velocity`, not Coulomb friction.
    pub friction: f64,
}

impl Material {
    /// Creates a new material with the given restitution and friction.
    pub fn new(restitution: f64, friction: f64) -> Self {
        Material {
            restitution: restitution.clamp(0.0, 1.0),
            friction: friction.max(0.0),
        }
    }

    /// A perfectly elastic material with no damping.
    pub fn elastic() -> Self {
        Material::new(1.0, 0.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            restitution: 0.8,
            friction: 0.1,
        }
    }
}
