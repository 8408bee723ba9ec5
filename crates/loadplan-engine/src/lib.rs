//! # loadplan-engine
//!
//! Truckload planning for oversize/overweight cargo: per-item truck fit and
//! legality scoring, greedy multi-truck assignment with item splitting, 2D
//! deck placement, utilization rebalancing, and forced-truck replanning.
//!
//! The engine is synchronous, allocation-only, and deterministic: the same
//! item list against the same catalog always yields the same [`Plan`].
//!
//! ## Quick start
//!
//! ```rust
//! use loadplan_engine::{CargoItem, Planner, TruckCatalog};
//!
//! let planner = Planner::new(TruckCatalog::standard());
//!
//! let press = CargoItem::new("press-1", "Hydraulic press")
//!     .with_dims(20.0, 8.0, 8.0)
//!     .with_weight(30000.0);
//!
//! let plan = planner.plan(&[press]).unwrap();
//! assert_eq!(plan.summary.truck_count, 1);
//! assert!(plan.loads[0].is_legal);
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: enable serialization of all public types.

pub mod assigner;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod planner;
pub mod rebalancer;
pub mod replan;
pub mod splitter;

// Re-exports
pub use config::PlannerConfig;
pub use deck::{pack_deck, DeckPlan};
pub use evaluator::{evaluate, evaluate_on_truck, ItemView, TruckFit};
pub use planner::Planner;
pub use replan::ReplanOutcome;
pub use splitter::{split_item, SplitOutcome};
pub use loadplan_core::{
    CargoItem, DivisionMode, Error, ItemId, LegalLimits, LoadingMethod, Placement, Plan,
    PlanSummary, Rect, Result, SplitItemGroup, SplitMode, SplitOrigin, TruckCatalog,
    TruckCategory, TruckId, TruckLoad, TruckType, UnassignedItem,
};
