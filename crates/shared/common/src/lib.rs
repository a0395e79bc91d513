//! Common utilities shared across the registry crates.
//!
//! This crate provides:
//! - Unified error handling for HTTP and gRPC
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
