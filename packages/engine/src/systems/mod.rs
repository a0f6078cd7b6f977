//! Systems operating on the stage world

pub mod collision;
pub mod forces;
pub mod pointer;
pub mod roster;
pub mod walls;
pub mod world;

pub use pointer::{Pointer, PointerConstraint};
pub use world::World;
