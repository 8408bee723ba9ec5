//! Error types for the loadplan crates.

use thiserror::Error;

/// Errors that can occur while building or planning truckloads.
#[derive(Debug, Error)]
pub enum Error {
    /// A cargo item has invalid dimensions, weight, or quantity.
    #[error("Invalid cargo item: {0}")]
    InvalidItem(String),

    /// A truck type has invalid deck dimensions or weights.
    #[error("Invalid truck type: {0}")]
    InvalidTruck(String),

    /// A truck type id was not found in the catalog.
    #[error("Unknown truck type: {0}")]
    UnknownTruck(String),

    /// A truckload index was outside the plan.
    #[error("Truckload index out of range: {0}")]
    LoadIndex(usize),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias used throughout the loadplan crates.
pub type Result<T> = std::result::Result<T, Error>;
