//! Core utilities shared by every layer

#[macro_use]
#[path = "utils/console.rs"]
pub mod console;
pub mod random;
