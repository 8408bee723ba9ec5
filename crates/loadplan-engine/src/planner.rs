//! Planner facade.

use crate::assigner::assign;
use crate::config::PlannerConfig;
use crate::rebalancer::rebalance;
use crate::replan::{replan, ReplanOutcome};
use loadplan_core::{CargoItem, LegalLimits, Plan, Result, TruckCatalog};

/// Plans truckloads for oversize/overweight cargo.
///
/// Holds the immutable truck catalog, legal limits, and tunables. Planning is
/// pure and deterministic: the same items against the same catalog always
/// produce the same plan.
pub struct Planner {
    catalog: TruckCatalog,
    limits: LegalLimits,
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner over the given catalog with default limits and
    /// configuration.
    pub fn new(catalog: TruckCatalog) -> Self {
        Self {
            catalog,
            limits: LegalLimits::default(),
            config: PlannerConfig::default(),
        }
    }

    /// Sets the legal limits.
    pub fn with_limits(mut self, limits: LegalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the planner configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the catalog this planner works from.
    pub fn catalog(&self) -> &TruckCatalog {
        &self.catalog
    }

    /// Plans the given items: assignment, rebalancing, and summary totals.
    pub fn plan(&self, items: &[CargoItem]) -> Result<Plan> {
        let plan = assign(items, &self.catalog, &self.limits, &self.config)?;
        let mut plan = rebalance(plan, &self.limits, &self.config);

        let mut warnings: Vec<String> = Vec::new();
        for load in &plan.loads {
            warnings.extend(load.warnings.iter().cloned());
        }
        for entry in &plan.unassigned {
            warnings.push(entry.reason.clone());
        }
        plan.warnings = warnings;

        Ok(plan)
    }

    /// Re-packs one truckload onto a forced truck type, leaving all other
    /// loads unchanged.
    pub fn replan(
        &self,
        plan: &Plan,
        load_index: usize,
        new_truck_id: &str,
    ) -> Result<ReplanOutcome> {
        replan(
            plan,
            load_index,
            new_truck_id,
            &self.catalog,
            &self.limits,
            &self.config,
        )
    }
}
