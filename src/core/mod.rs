//! Core components of the `alphavantage-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - Internal networking.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`AvError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use error::AvError;
