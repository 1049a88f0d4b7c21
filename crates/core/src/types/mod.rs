//! Core types for Backyard Birds.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::PrintId;
pub use price::Price;
