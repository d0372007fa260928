pub mod physics_object;

pub use physics_object::PhysicsObject;
