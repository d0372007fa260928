//! Headless driver: fixed-timestep loop, energy tracking, scenario presets
//! and pointer interaction, with no windowing attached.

pub mod driver;
pub mod energy;
pub mod scenario;
pub mod slingshot;
pub mod spawner;

pub use driver::Simulation;
pub use energy::{EnergyHistory, EnergySample};
pub use scenario::Scenario;
pub use slingshot::{predict_trajectory, Slingshot};
pub use spawner::ObjectSpawner;
