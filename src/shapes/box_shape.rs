use serde::{Deserialize, Serialize};

pub const DEFAULT_BOX_SIZE: f64 = 40.0;

/// Axis-aligned box. Carried on bodies for presentation; the collision
/// pipeline does not resolve boxes yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub width: f64,
    pub height: f64,
}

impl BoxShape {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(width >= 0.0 && height >= 0.0, "Box dimensions cannot be negative");
        Self { width, height }
    }

    pub fn half_extents(&self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_SIZE, DEFAULT_BOX_SIZE)
    }
}
