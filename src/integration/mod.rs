pub mod integrator;

pub use integrator::{integrate, IntegrationMethod};
