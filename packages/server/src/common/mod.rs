// Common types and utilities shared across the application

pub mod patch;

pub use patch::*;
