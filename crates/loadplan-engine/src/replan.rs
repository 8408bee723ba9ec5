//! Repacking one truckload onto a user-forced truck type.

use crate::assigner::rebuild_load_on_truck;
use crate::config::PlannerConfig;
use crate::evaluator::{fits_truck, ItemView};
use loadplan_core::{
    CargoItem, Error, LegalLimits, Plan, Result, TruckCatalog, TruckLoad, UnassignedItem,
};

/// Result of forcing a truckload onto a different truck type.
#[derive(Debug, Clone)]
pub struct ReplanOutcome {
    /// The updated plan with the target load replaced and loads renumbered.
    pub plan: Plan,
    /// True when the load split into more than one truck of the new type.
    pub split_occurred: bool,
    /// Items from the original load that cannot physically fit the new truck.
    pub unfit: Vec<UnassignedItem>,
}

/// Re-packs the items of `plan.loads[load_index]` onto trucks of type
/// `new_truck_id` using first-fit-decreasing under the replan utilization
/// cap. All other loads are unchanged; the whole plan is renumbered.
pub fn replan(
    plan: &Plan,
    load_index: usize,
    new_truck_id: &str,
    catalog: &TruckCatalog,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> Result<ReplanOutcome> {
    if load_index >= plan.loads.len() {
        return Err(Error::LoadIndex(load_index));
    }
    let truck = catalog
        .get(new_truck_id)
        .ok_or_else(|| Error::UnknownTruck(new_truck_id.to_string()))?;

    let original_number = plan.loads[load_index].number;
    let mut items: Vec<CargoItem> = plan.loads[load_index].items.clone();

    // Items the new truck can never carry are set aside untouched.
    let mut unfit = Vec::new();
    items.retain(|item| {
        if fits_truck(&ItemView::of_item(item), truck) {
            true
        } else {
            unfit.push(UnassignedItem {
                item: item.clone(),
                reason: format!(
                    "Item '{}' does not fit truck type '{}'",
                    item.id(),
                    truck.id
                ),
            });
            false
        }
    });

    // First-fit-decreasing over loads of the forced type.
    items.sort_by(|a, b| {
        b.total_weight()
            .total_cmp(&a.total_weight())
            .then_with(|| a.id().cmp(b.id()))
    });

    let mut new_loads: Vec<TruckLoad> = Vec::new();
    for item in items {
        let mut placed = false;
        for load in new_loads.iter_mut() {
            if load.total_weight + item.total_weight() > config.replan_cap * truck.max_cargo_weight
            {
                continue;
            }
            let mut candidate = load.clone();
            candidate.items.push(item.clone());
            if rebuild_load_on_truck(&mut candidate, limits, config) {
                *load = candidate;
                placed = true;
                break;
            }
        }
        if placed {
            continue;
        }

        let mut load = TruckLoad::new(0, truck.clone());
        load.items.push(item.clone());
        if !rebuild_load_on_truck(&mut load, limits, config) {
            // fits_truck held, so a lone item always packs; treat anything
            // else as unfit rather than dropping it silently.
            unfit.push(UnassignedItem {
                item,
                reason: format!("No valid deck placement on truck type '{}'", truck.id),
            });
            continue;
        }
        new_loads.push(load);
    }

    let split_occurred = new_loads.len() > 1;

    let mut updated = plan.clone();
    let replacement_count = new_loads.len();
    updated.loads.splice(load_index..=load_index, new_loads);
    updated.unassigned.extend(unfit.iter().cloned());
    updated.refresh();

    // Rebuild the flat warning list from the updated loads so it reflects the
    // post-replan plan, not the one it replaced.
    let mut warnings: Vec<String> = Vec::new();
    if split_occurred {
        warnings.push(format!(
            "Truckload {} split into {} trucks of type '{}'",
            original_number, replacement_count, truck.id
        ));
    }
    for load in &updated.loads {
        warnings.extend(load.warnings.iter().cloned());
    }
    for entry in &updated.unassigned {
        warnings.push(entry.reason.clone());
    }
    updated.warnings = warnings;

    Ok(ReplanOutcome {
        plan: updated,
        split_occurred,
        unfit,
    })
}
