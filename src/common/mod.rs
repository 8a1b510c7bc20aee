//! Common types and utilities shared across nbtree.
//!
//! This module contains:
//! - Configuration constants and [`TreeConfig`](config::TreeConfig)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
