pub mod collision;
pub mod common;
pub mod config;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod simulation;
pub mod world;

// Re-export key types for easier use
pub use common::{Appearance, Color, Material};
pub use config::{Config, EngineConfig, SimulationConfig};
pub use error::{Error, Result};
pub use integration::IntegrationMethod;
pub use math::vec2::Vec2;
pub use objects::PhysicsObject;
pub use shapes::{BoxShape, Circle, Shape, ShapeKind};
pub use simulation::{EnergyHistory, EnergySample, Scenario, Simulation};
pub use world::{BodyHandle, PhysicsEngine};
