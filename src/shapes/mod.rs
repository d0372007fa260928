pub mod box_shape;
pub mod circle;

pub use box_shape::BoxShape;
pub use circle::Circle;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geometric shape of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Box(BoxShape),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle::new(radius))
    }

    pub fn rect(width: f64, height: f64) -> Self {
        Shape::Box(BoxShape::new(width, height))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Box(_) => ShapeKind::Box,
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Circle(Circle::default())
    }
}

/// Payload-free discriminant of [`Shape`], used when reporting shape pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Box,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => f.write_str("circle"),
            ShapeKind::Box => f.write_str("box"),
        }
    }
}
