use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::Color;
use crate::math::vec2::Vec2;
use crate::objects::PhysicsObject;

/// Builds bodies for the driver, tinting each with a colour drawn from an
/// explicit random source. Physics never sees the generator.
#[derive(Debug, Clone)]
pub struct ObjectSpawner<R = StdRng> {
    rng: R,
}

impl ObjectSpawner<StdRng> {
    /// Deterministic spawner: the same seed always yields the same colours.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ObjectSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A default circle at `position` with the given mass and velocity.
    pub fn spawn(&mut self, position: Vec2, mass: f64, velocity: Vec2) -> PhysicsObject {
        let color = self.random_color();
        PhysicsObject::new(position, mass)
            .with_velocity(velocity)
            .with_color(color)
    }

    /// Bluish tint: each channel gets a random offset in `[0, 0.33]`.
    pub fn random_color(&mut self) -> Color {
        let mut channel = |base: f32| base + self.rng.random_range(0..100u32) as f32 / 300.0;
        let r = channel(0.3);
        let g = channel(0.3);
        let b = channel(0.6);
        Color::new(r, g, b)
    }
}
