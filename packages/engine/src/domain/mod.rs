//! Domain types: vectors, bodies, styles, configuration and errors

pub mod body;
pub mod config;
pub mod error;
pub mod palette;
pub mod vec2;

pub use body::{Body, BodyId, Category, Material, Shape};
pub use config::StageConfig;
pub use error::StageError;
pub use palette::{Color, Style};
pub use vec2::Vec2;
