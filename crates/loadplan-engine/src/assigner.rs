//! Greedy multi-truck assignment.
//!
//! Splits over-capacity divisible items, sorts the resulting stream heaviest
//! first, and assigns each item either to the best existing truckload or to a
//! freshly opened one. A single greedy pass: feasible, not necessarily a
//! minimal truck count.

use crate::config::PlannerConfig;
use crate::deck::pack_deck;
use crate::evaluator::{evaluate, ItemView, TruckFit};
use crate::splitter::split_item;
use loadplan_core::{
    CargoItem, LegalLimits, Plan, Result, TruckCatalog, TruckLoad, UnassignedItem,
};

/// Pairwise geometric compatibility of two items under one truck: they must
/// fit side-by-side, end-to-end, or (both stackable) stacked within the legal
/// height.
pub(crate) fn pairwise_compatible(
    a: &CargoItem,
    b: &CargoItem,
    truck: &loadplan_core::TruckType,
    limits: &LegalLimits,
) -> bool {
    let side_by_side =
        a.width() + b.width() <= truck.deck_width && a.length().max(b.length()) <= truck.deck_length;
    let end_to_end =
        a.length() + b.length() <= truck.deck_length && a.width().max(b.width()) <= truck.deck_width;
    let stacked = a.stackable()
        && b.stackable()
        && a.height() + b.height() + truck.deck_height <= limits.max_height;

    side_by_side || end_to_end || stacked
}

/// Refreshes a load's chosen truck, score, permits, legality flag, and
/// load-level warnings from an evaluator result.
pub(crate) fn apply_fit(load: &mut TruckLoad, fit: &TruckFit, limits: &LegalLimits) {
    load.truck = fit.truck.clone();
    load.suitability_score = fit.score;
    load.permits_required = fit.permits.clone();
    load.is_legal = fit.is_legal;

    load.warnings.clear();
    if load.max_height + load.truck.deck_height > limits.max_height {
        load.warnings
            .push("Oversize height load: height permit and route survey required".to_string());
    }
    if load.max_width > limits.max_width {
        load.warnings
            .push("Oversize width load: width permit required".to_string());
    }
    if load.max_width > limits.escort_width {
        load.warnings.push(format!(
            "Escort vehicles required: load width {:.1} ft exceeds {:.1} ft",
            load.max_width, limits.escort_width
        ));
    }
}

/// Re-derives a load from its item list: aggregates, best truck for the
/// aggregate, and a full repack. Returns `false` (load untouched semantics
/// are the caller's responsibility via a prior clone) when the aggregate fits
/// no truck or the repack leaves an item unplaced.
pub(crate) fn rebuild_load(
    load: &mut TruckLoad,
    catalog: &TruckCatalog,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> bool {
    load.recompute_aggregates();

    let fit = match evaluate(&ItemView::of_load(load), catalog, limits) {
        Some(fit) => fit,
        None => return false,
    };

    let deck = pack_deck(&load.items, &fit.truck, config);
    if !deck.all_placed() {
        return false;
    }

    apply_fit(load, &fit, limits);
    load.placements = deck.placements;
    true
}

/// Rebuilds a load keeping its current truck type fixed (no truck search).
/// The suitability score is recomputed for the new aggregate.
pub(crate) fn rebuild_load_on_truck(
    load: &mut TruckLoad,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> bool {
    load.recompute_aggregates();
    if load.total_weight > load.truck.max_cargo_weight {
        return false;
    }

    let deck = pack_deck(&load.items, &load.truck, config);
    if !deck.all_placed() {
        return false;
    }

    let truck = load.truck.clone();
    let fit = crate::evaluator::evaluate_on_truck(&ItemView::of_load(load), &truck, limits);
    apply_fit(load, &fit, limits);
    load.placements = deck.placements;
    true
}

/// Candidate host loads for an item, ordered by preference: lowest resulting
/// utilization at or under the soft target first, then the remainder under
/// the hard cap.
fn host_candidates(
    loads: &[TruckLoad],
    item: &CargoItem,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> Vec<usize> {
    let mut soft: Vec<(usize, f64)> = Vec::new();
    let mut hard: Vec<(usize, f64)> = Vec::new();

    for (idx, load) in loads.iter().enumerate() {
        let compatible = load
            .items
            .iter()
            .all(|resident| pairwise_compatible(resident, item, &load.truck, limits));
        if !compatible {
            continue;
        }

        let resulting =
            (load.total_weight + item.total_weight()) / load.truck.max_cargo_weight;
        if resulting <= config.soft_utilization {
            soft.push((idx, resulting));
        } else if resulting <= config.hard_utilization {
            hard.push((idx, resulting));
        }
    }

    let by_util = |a: &(usize, f64), b: &(usize, f64)| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0));
    soft.sort_by(by_util);
    hard.sort_by(by_util);

    soft.into_iter().chain(hard).map(|(idx, _)| idx).collect()
}

/// Attempts to add `item` to `loads[idx]`, re-evaluating the grown aggregate
/// (which may upgrade the truck type) and repacking the deck. Reverts on
/// placement failure.
fn try_add_to_load(
    loads: &mut [TruckLoad],
    idx: usize,
    item: &CargoItem,
    catalog: &TruckCatalog,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> bool {
    let mut candidate = loads[idx].clone();
    candidate.items.push(item.clone());

    if !rebuild_load(&mut candidate, catalog, limits, config) {
        log::debug!(
            "item '{}' rejected by truckload {}: no feasible repack",
            item.id(),
            loads[idx].number
        );
        return false;
    }

    loads[idx] = candidate;
    true
}

/// Runs the full assignment pass over the item stream.
///
/// Input items are validated up front; malformed items abort the run with
/// [`loadplan_core::Error::InvalidItem`]. Business failures (too large for
/// any truck, unsplittable, unplaceable) land in `Plan::unassigned`.
pub fn assign(
    items: &[CargoItem],
    catalog: &TruckCatalog,
    limits: &LegalLimits,
    config: &PlannerConfig,
) -> Result<Plan> {
    for item in items {
        item.validate()?;
    }

    let mut plan = Plan::new();
    let max_capacity = catalog.max_cargo_capacity();

    // Split pre-pass: divide anything heavier than the largest truck.
    let mut stream: Vec<CargoItem> = Vec::new();
    for item in items {
        if item.total_weight() > max_capacity {
            match split_item(item, max_capacity) {
                Some(outcome) => {
                    plan.split_groups.push(outcome.group);
                    stream.extend(outcome.parts);
                }
                None => plan.unassigned.push(UnassignedItem {
                    item: item.clone(),
                    reason: format!(
                        "Item '{}' weighs {:.0} lbs, exceeds the largest truck capacity \
                         ({:.0} lbs) and cannot be split",
                        item.id(),
                        item.total_weight(),
                        max_capacity
                    ),
                }),
            }
        } else {
            stream.push(item.clone());
        }
    }

    // Heaviest first: the standard greedy ordering for bin-packing quality.
    stream.sort_by(|a, b| {
        b.total_weight()
            .total_cmp(&a.total_weight())
            .then_with(|| a.id().cmp(b.id()))
    });

    for item in &stream {
        let best = match evaluate(&ItemView::of_item(item), catalog, limits) {
            Some(fit) => fit,
            None => {
                plan.unassigned.push(UnassignedItem {
                    item: item.clone(),
                    reason: format!(
                        "Item '{}' ({:.1} x {:.1} ft, {:.0} lbs) does not fit any truck \
                         in the catalog",
                        item.id(),
                        item.length(),
                        item.width(),
                        item.total_weight()
                    ),
                });
                continue;
            }
        };

        let mut hosted = false;
        for idx in host_candidates(&plan.loads, item, limits, config) {
            if try_add_to_load(&mut plan.loads, idx, item, catalog, limits, config) {
                hosted = true;
                break;
            }
        }
        if hosted {
            continue;
        }

        // Open a new truckload on the item's own best-fit truck.
        let number = (plan.loads.len() + 1) as u32;
        let mut load = TruckLoad::new(number, best.truck.clone());
        load.items.push(item.clone());
        load.recompute_aggregates();

        let deck = pack_deck(&load.items, &load.truck, config);
        if !deck.all_placed() {
            plan.unassigned.push(UnassignedItem {
                item: item.clone(),
                reason: format!("Item '{}' has no valid deck placement", item.id()),
            });
            continue;
        }

        apply_fit(&mut load, &best, limits);
        load.placements = deck.placements;
        plan.loads.push(load);
    }

    plan.refresh();
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadplan_core::DivisionMode;

    fn setup() -> (TruckCatalog, LegalLimits, PlannerConfig) {
        (
            TruckCatalog::standard(),
            LegalLimits::default(),
            PlannerConfig::default(),
        )
    }

    fn item(id: &str, length: f64, width: f64, height: f64, weight: f64) -> CargoItem {
        CargoItem::new(id, "machine base")
            .with_dims(length, width, height)
            .with_weight(weight)
    }

    #[test]
    fn test_single_item_single_load() {
        let (catalog, limits, config) = setup();
        let items = vec![item("A", 20.0, 8.0, 8.0, 30000.0)];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert!(plan.all_assigned());
        assert!(plan.loads[0].is_legal);
        assert!(plan.loads[0].permits_required.is_empty());
    }

    #[test]
    fn test_two_small_items_share_truck() {
        let (catalog, limits, config) = setup();
        let items = vec![
            item("A", 15.0, 4.0, 5.0, 12000.0),
            item("B", 15.0, 4.0, 5.0, 12000.0),
        ];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert_eq!(plan.loads[0].items.len(), 2);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let (catalog, limits, config) = setup();
        let items: Vec<CargoItem> = (0..6)
            .map(|i| item(&format!("I{i}"), 10.0, 4.0, 5.0, 20000.0))
            .collect();
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert!(plan.all_assigned());
        for load in &plan.loads {
            assert!(
                load.total_weight <= load.truck.max_cargo_weight + 1e-9,
                "load {} over capacity",
                load.number
            );
        }
    }

    #[test]
    fn test_unfittable_item_goes_unassigned() {
        let (catalog, limits, config) = setup();
        let items = vec![item("HUGE", 100.0, 8.0, 5.0, 20000.0)];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert!(plan.loads.is_empty());
        assert_eq!(plan.unassigned.len(), 1);
        assert!(plan.unassigned[0].reason.contains("does not fit any truck"));
    }

    #[test]
    fn test_overweight_divisible_item_splits() {
        let (catalog, limits, config) = setup();
        let items = vec![CargoItem::new("BULK", "Plate stack")
            .with_dims(10.0, 6.0, 2.0)
            .with_weight(5000.0)
            .with_quantity(20)
            .with_division(DivisionMode::ByQuantity { min_quantity: 2 })];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert!(plan.all_assigned());
        assert_eq!(plan.split_groups.len(), 1);
        assert!(plan.loads.len() >= 2);

        let assigned_units: u32 = plan.loads.iter().map(|l| l.unit_count()).sum();
        assert_eq!(assigned_units, 20);
    }

    #[test]
    fn test_overweight_indivisible_item_unassigned() {
        let (catalog, limits, config) = setup();
        let items = vec![item("DENSE", 10.0, 6.0, 5.0, 120000.0)];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert!(plan.loads.is_empty());
        assert_eq!(plan.unassigned.len(), 1);
        assert!(plan.unassigned[0].reason.contains("cannot be split"));
    }

    #[test]
    fn test_invalid_item_rejected() {
        let (catalog, limits, config) = setup();
        let items = vec![item("BAD", 0.0, 6.0, 5.0, 1000.0)];
        assert!(assign(&items, &catalog, &limits, &config).is_err());
    }

    #[test]
    fn test_escort_warning_for_wide_load() {
        let (catalog, limits, config) = setup();
        // Needs a deck wider than 12 ft for the test.
        let mut trucks = catalog.trucks().to_vec();
        trucks[0].deck_width = 14.0;
        let catalog = TruckCatalog::new(trucks).unwrap();

        let items = vec![item("WIDE", 20.0, 13.0, 5.0, 20000.0)];
        let plan = assign(&items, &catalog, &limits, &config).unwrap();

        assert_eq!(plan.loads.len(), 1);
        assert!(!plan.loads[0].is_legal);
        assert!(plan.loads[0]
            .warnings
            .iter()
            .any(|w| w.contains("Escort vehicles required")));
    }

    #[test]
    fn test_pairwise_compatibility() {
        let (catalog, limits, _) = setup();
        let truck = &catalog.trucks()[0];

        let a = item("A", 30.0, 5.0, 5.0, 1000.0);
        let b = item("B", 30.0, 5.0, 5.0, 1000.0);
        // 5 + 5 > 8.5 wide and 30 + 30 > 48 long, neither stackable.
        assert!(!pairwise_compatible(&a, &b, truck, &limits));

        let c = item("C", 30.0, 3.0, 5.0, 1000.0);
        let d = item("D", 30.0, 3.0, 5.0, 1000.0);
        assert!(pairwise_compatible(&c, &d, truck, &limits));

        let e = item("E", 30.0, 5.0, 3.0, 1000.0).with_stackable(true);
        let f = item("F", 30.0, 5.0, 3.0, 1000.0).with_stackable(true);
        // Stacked: 3 + 3 + 5.0 deck = 11.0 within the 13.5 limit.
        assert!(pairwise_compatible(&e, &f, truck, &limits));
    }
}
