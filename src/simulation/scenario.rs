use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::spawner::ObjectSpawner;
use crate::common::Color;
use crate::error::Error;
use crate::math::vec2::Vec2;
use crate::objects::PhysicsObject;
use crate::world::PhysicsEngine;

/// Preset body layouts the sandbox can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// A few free bodies to play with.
    #[default]
    Sandbox,
    /// A single body launched up and to the right.
    ProjectileMotion,
    /// Two equal, perfectly elastic bodies on a head-on course.
    ElasticCollisions,
    /// One body with a sideways kick.
    HarmonicMotion,
    /// One body launched at a shallow angle.
    InclinedPlane,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Sandbox,
        Scenario::ProjectileMotion,
        Scenario::ElasticCollisions,
        Scenario::HarmonicMotion,
        Scenario::InclinedPlane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Sandbox => "sandbox",
            Scenario::ProjectileMotion => "projectile-motion",
            Scenario::ElasticCollisions => "elastic-collisions",
            Scenario::HarmonicMotion => "harmonic-motion",
            Scenario::InclinedPlane => "inclined-plane",
        }
    }

    /// Adds this scenario's bodies to `engine`. Existing bodies are kept.
    pub fn populate<R: Rng>(self, engine: &mut PhysicsEngine, spawner: &mut ObjectSpawner<R>) {
        match self {
            Scenario::Sandbox => {
                for (x, y, mass) in [(200.0, 200.0, 15.0), (400.0, 150.0, 20.0), (600.0, 250.0, 10.0)] {
                    engine.add_object(spawner.spawn(Vec2::new(x, y), mass, Vec2::ZERO));
                }
            }
            Scenario::ProjectileMotion => {
                engine.add_object(
                    PhysicsObject::new(Vec2::new(100.0, 600.0), 10.0)
                        .with_velocity(Vec2::new(300.0, -400.0))
                        .with_color(Color::ORANGE),
                );
            }
            Scenario::ElasticCollisions => {
                engine.add_object(
                    PhysicsObject::new(Vec2::new(300.0, 360.0), 15.0)
                        .with_velocity(Vec2::new(200.0, 0.0))
                        .with_restitution(1.0)
                        .with_color(Color::CYAN),
                );
                engine.add_object(
                    PhysicsObject::new(Vec2::new(800.0, 360.0), 15.0)
                        .with_velocity(Vec2::new(-200.0, 0.0))
                        .with_restitution(1.0)
                        .with_color(Color::CORAL),
                );
            }
            Scenario::HarmonicMotion => {
                engine.add_object(
                    PhysicsObject::new(Vec2::new(640.0, 200.0), 10.0).with_velocity(Vec2::new(200.0, 0.0)),
                );
            }
            Scenario::InclinedPlane => {
                engine.add_object(spawner.spawn(Vec2::new(300.0, 400.0), 10.0, Vec2::new(100.0, -50.0)));
            }
        }
        debug!(scenario = %self, bodies = engine.len(), "scenario populated");
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownScenario(s.to_string()))
    }
}
