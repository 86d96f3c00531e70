//! Core types and shared functionality for boj2md.
//!
//! This crate provides:
//! - The parsed problem record
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod problem;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use error::Error;
pub use problem::{Problem, Sample};
