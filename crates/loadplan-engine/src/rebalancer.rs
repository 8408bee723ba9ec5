//! Single-pass utilization rebalancing.
//!
//! Moves one item at a time from over-utilized truckloads to under-utilized
//! ones. Eligibility is a capacity-only check against the destination — the
//! destination's pairwise geometry is not re-verified, an intentional carry
//! over from the original heuristic. A move whose repack fails on either side
//! is reverted, so the pass never leaves an overlap behind.

use crate::assigner::rebuild_load_on_truck;
use crate::config::PlannerConfig;
use loadplan_core::{LegalLimits, Plan};

/// Attempts one item move from `loads[hot]` to `loads[cold]`. Returns true if
/// the move was committed.
fn try_move(
    plan: &mut Plan,
    hot: usize,
    cold: usize,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> bool {
    let item_idx = match plan.loads[hot].lightest_item_index() {
        Some(idx) => idx,
        None => return false,
    };
    let item = plan.loads[hot].items[item_idx].clone();

    let cold_load = &plan.loads[cold];
    let absorbed = cold_load.total_weight + item.total_weight();
    if absorbed > config.rebalance_cap * cold_load.truck.max_cargo_weight {
        return false;
    }

    let mut new_hot = plan.loads[hot].clone();
    new_hot.items.remove(item_idx);
    let mut new_cold = plan.loads[cold].clone();
    new_cold.items.push(item);

    if !rebuild_load_on_truck(&mut new_cold, limits, config) {
        log::debug!(
            "rebalance move from truckload {} to {} reverted: no feasible repack",
            plan.loads[hot].number,
            plan.loads[cold].number
        );
        return false;
    }
    if !new_hot.items.is_empty() && !rebuild_load_on_truck(&mut new_hot, limits, config) {
        return false;
    }
    if new_hot.items.is_empty() {
        new_hot.recompute_aggregates();
        new_hot.placements.clear();
    }

    plan.loads[hot] = new_hot;
    plan.loads[cold] = new_cold;
    true
}

/// Runs a single rebalancing pass and returns the updated plan.
///
/// Loads above the hot threshold shed their lightest item to loads below the
/// cold threshold (coldest first), at most one move per hot/cold pair.
/// Emptied loads are dropped and the remainder renumbered. Truck count never
/// increases.
pub fn rebalance(mut plan: Plan, limits: &LegalLimits, config: &PlannerConfig) -> Plan {
    let mut hot_order: Vec<usize> = (0..plan.loads.len()).collect();
    hot_order.sort_by(|&a, &b| {
        plan.loads[b]
            .utilization()
            .total_cmp(&plan.loads[a].utilization())
            .then(a.cmp(&b))
    });

    for hot in hot_order {
        if plan.loads[hot].utilization() <= config.rebalance_hot {
            continue;
        }

        let mut cold_order: Vec<usize> = (0..plan.loads.len())
            .filter(|&i| i != hot && plan.loads[i].utilization() < config.rebalance_cold)
            .collect();
        cold_order.sort_by(|&a, &b| {
            plan.loads[a]
                .utilization()
                .total_cmp(&plan.loads[b].utilization())
                .then(a.cmp(&b))
        });

        for cold in cold_order {
            if plan.loads[hot].utilization() <= config.rebalance_hot {
                break;
            }
            if plan.loads[cold].utilization() >= config.rebalance_cold {
                continue;
            }
            try_move(&mut plan, hot, cold, limits, config);
        }
    }

    plan.loads.retain(|load| !load.items.is_empty());
    plan.refresh();
    plan
}
