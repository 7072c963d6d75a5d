//! Shared utilities for the boundary layers.

pub mod errors;

pub use errors::CompanionError;
