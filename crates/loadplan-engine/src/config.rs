//! Planner configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for the planning passes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Base grid step for deck placement scanning.
    pub grid_step: f64,

    /// Tolerance for overlap and bounds tests (touching edges are allowed).
    pub epsilon: f64,

    /// Tolerance for edge-adjacency bonuses during placement scoring.
    pub adjacency_tolerance: f64,

    /// Upper bound on scanned grid cells per deck before the step is
    /// coarsened. Keeps the placement search bounded on large decks.
    pub max_grid_cells: usize,

    /// Soft weight-utilization target when choosing a host load.
    pub soft_utilization: f64,

    /// Hard weight-utilization cap, never exceeded.
    pub hard_utilization: f64,

    /// Utilization above which a load is rebalanced away from.
    pub rebalance_hot: f64,

    /// Utilization below which a load may absorb rebalanced items.
    pub rebalance_cold: f64,

    /// Utilization cap for a load absorbing a rebalanced item.
    pub rebalance_cap: f64,

    /// Utilization cap for first-fit-decreasing during replanning.
    pub replan_cap: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            grid_step: 0.5,
            epsilon: 0.01,
            adjacency_tolerance: 0.1,
            max_grid_cells: 20000,
            soft_utilization: 0.85,
            hard_utilization: 1.0,
            rebalance_hot: 0.90,
            rebalance_cold: 0.80,
            rebalance_cap: 0.95,
            replan_cap: 0.95,
        }
    }
}

impl PlannerConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base placement grid step.
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Sets the overlap tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the soft utilization target for host selection.
    pub fn with_soft_utilization(mut self, target: f64) -> Self {
        self.soft_utilization = target.clamp(0.0, 1.0);
        self
    }

    /// Sets the grid cell budget for deck scanning.
    pub fn with_max_grid_cells(mut self, cells: usize) -> Self {
        self.max_grid_cells = cells;
        self
    }
}
