use serde::{Deserialize, Serialize};

/// Radius given to bodies that do not ask for anything else.
pub const DEFAULT_RADIUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}
