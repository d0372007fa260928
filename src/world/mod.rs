pub mod physics_engine;

pub use physics_engine::{BodyHandle, PhysicsEngine};
