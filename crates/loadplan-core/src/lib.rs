//! # loadplan-core
//!
//! Shared data model for the loadplan truckload planning engine.
//!
//! This crate defines the immutable truck catalog, cargo item types, legal
//! road limits, deck placements, and the plan output types consumed by the
//! algorithms in `loadplan-engine`.
//!
//! ## Core types
//!
//! - [`CargoItem`] — an oversize/overweight cargo item with footprint,
//!   height, weight, stackability, and divisibility.
//! - [`TruckType`] / [`TruckCatalog`] — immutable trailer specifications.
//! - [`LegalLimits`] — regulatory thresholds for height, width, and gross
//!   weight.
//! - [`Placement`] / [`Rect`] — non-overlapping deck positions.
//! - [`TruckLoad`] / [`Plan`] — the planning output.
//!
//! ## Feature flags
//!
//! - `serde`: enable serialization/deserialization of all public types.

pub mod error;
pub mod item;
pub mod limits;
pub mod placement;
pub mod plan;
pub mod truck;

// Re-exports
pub use error::{Error, Result};
pub use item::{CargoItem, DivisionMode, ItemId, SplitOrigin};
pub use limits::LegalLimits;
pub use placement::{Placement, Rect};
pub use plan::{Plan, PlanSummary, SplitItemGroup, SplitMode, TruckLoad, UnassignedItem};
pub use truck::{LoadingMethod, TruckCatalog, TruckCategory, TruckId, TruckType};
