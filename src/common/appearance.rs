//! Presentation-only data carried on bodies. Physics never reads it.

use serde::{Deserialize, Serialize};

/// RGB colour with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const SKY: Color = Color { r: 0.3, g: 0.7, b: 1.0 };
    pub const ORANGE: Color = Color { r: 1.0, g: 0.5, b: 0.0 };
    pub const CYAN: Color = Color { r: 0.2, g: 0.8, b: 1.0 };
    pub const CORAL: Color = Color { r: 1.0, g: 0.3, b: 0.3 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::SKY
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Appearance {
    pub color: Color,
    pub label: Option<String>,
}
