pub mod appearance;
pub mod material;

pub use appearance::{Appearance, Color};
pub use material::Material;
