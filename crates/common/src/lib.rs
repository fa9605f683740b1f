//! Shared utilities and error handling for Signet
//!
//! This crate provides common functionality used across the Signet
//! application:
//! - Error types and handling
//! - Request parameter coercion helpers

pub mod error;
pub mod params;

pub use error::{Error, Result};
pub use params::{path_int, query_bool, query_int};
