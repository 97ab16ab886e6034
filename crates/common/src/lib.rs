//! Shared configuration, error, and response types for service-b.

pub mod config;
pub mod error;
pub mod types;
