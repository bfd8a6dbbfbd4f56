// Student Management Service - API Core
//
// This crate provides the backend API for managing student records.
// Domain logic lives under domains/, HTTP wiring under server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
