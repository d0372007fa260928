pub mod boundary;
pub mod detection;
pub mod manifold;
pub mod response;

pub use boundary::resolve_boundary;
pub use detection::{check_circle_circle, check_collision};
pub use manifold::CollisionManifold;
pub use response::resolve_contact;

use thiserror::Error;

use crate::shapes::ShapeKind;

/// Shape combinations the collision pipeline does not handle yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("no contact model for {a}-{b} pairs")]
    UnsupportedShapePair { a: ShapeKind, b: ShapeKind },

    #[error("no boundary model for {0} shapes")]
    UnsupportedBoundary(ShapeKind),
}
