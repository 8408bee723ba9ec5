//! Division of over-capacity divisible items into truck-sized parts.

use loadplan_core::{CargoItem, DivisionMode, SplitItemGroup, SplitMode, SplitOrigin};

/// Generated parts plus the reporting group for one split item.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// The generated parts, in split order.
    pub parts: Vec<CargoItem>,
    /// Reporting record for the plan output.
    pub group: SplitItemGroup,
}

fn part_id(original: &CargoItem, index: u32) -> String {
    format!("{}-part{}", original.id(), index)
}

fn split_by_quantity(item: &CargoItem, max_capacity: f64, min_quantity: u32) -> Option<SplitOutcome> {
    let units_per_truck = (max_capacity / item.weight()).floor() as u32;
    // A single unit heavier than the capacity can never be carved, whatever
    // the minimum says; without this check a zero minimum would loop forever.
    if units_per_truck == 0 || units_per_truck < min_quantity {
        return None;
    }

    let mut quantities: Vec<u32> = Vec::new();
    let mut remaining = item.quantity();
    while remaining > 0 {
        let take = units_per_truck.min(remaining);
        quantities.push(take);
        remaining -= take;
    }

    // An undersized final remainder never stands alone. Folding it into the
    // preceding full part would push that part over capacity, so the combined
    // tail is rebalanced into two parts instead when both can stay at or
    // above the minimum.
    if quantities.len() >= 2 {
        let last = *quantities.last().unwrap();
        if last < min_quantity {
            quantities.pop();
            let combined = *quantities.last().unwrap() + last;
            let low = combined / 2;
            let high = combined - low;
            if low >= min_quantity && combined as f64 * item.weight() > max_capacity {
                *quantities.last_mut().unwrap() = high;
                quantities.push(low);
            } else {
                *quantities.last_mut().unwrap() = combined;
            }
        }
    }

    let total_parts = quantities.len() as u32;
    let parts: Vec<CargoItem> = quantities
        .iter()
        .enumerate()
        .map(|(i, &qty)| {
            let index = (i + 1) as u32;
            let mut part = item
                .clone()
                .with_description(format!("{} (Part {})", item.description(), index))
                .with_quantity(qty)
                .with_split_from(SplitOrigin {
                    original_id: item.id().clone(),
                    part_index: index,
                    total_parts,
                });
            part = rename(part, part_id(item, index));
            part
        })
        .collect();

    Some(SplitOutcome {
        group: SplitItemGroup {
            original_id: item.id().clone(),
            parts: parts.iter().map(|p| p.id().clone()).collect(),
            mode: SplitMode::ByQuantity,
            total_parts,
        },
        parts,
    })
}

fn split_by_weight(item: &CargoItem, max_capacity: f64, min_weight: f64) -> Option<SplitOutcome> {
    if max_capacity < min_weight {
        return None;
    }

    let total = item.total_weight();
    let mut weights: Vec<f64> = Vec::new();
    let mut remaining = total;
    while remaining > 1e-9 {
        let take = max_capacity.min(remaining);
        weights.push(take);
        remaining -= take;
    }

    if weights.len() >= 2 {
        let last = *weights.last().unwrap();
        if last < min_weight {
            weights.pop();
            let combined = *weights.last().unwrap() + last;
            let half = combined / 2.0;
            if half >= min_weight && combined > max_capacity {
                *weights.last_mut().unwrap() = half;
                weights.push(half);
            } else {
                *weights.last_mut().unwrap() = combined;
            }
        }
    }

    let total_parts = weights.len() as u32;
    let parts: Vec<CargoItem> = weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let index = (i + 1) as u32;
            let percent = weight / total * 100.0;
            let mut part = item
                .clone()
                .with_description(format!(
                    "{} (Part {}, {:.1}%)",
                    item.description(),
                    index,
                    percent
                ))
                .with_quantity(1)
                .with_split_from(SplitOrigin {
                    original_id: item.id().clone(),
                    part_index: index,
                    total_parts,
                });
            part.set_weight(weight);
            part = rename(part, part_id(item, index));
            part
        })
        .collect();

    Some(SplitOutcome {
        group: SplitItemGroup {
            original_id: item.id().clone(),
            parts: parts.iter().map(|p| p.id().clone()).collect(),
            mode: SplitMode::ByWeight,
            total_parts,
        },
        parts,
    })
}

fn rename(part: CargoItem, id: String) -> CargoItem {
    // Parts are fresh items; rebuild with the deterministic part id and drop
    // divisibility so a part is never re-split.
    let mut rebuilt = CargoItem::new(id, part.description())
        .with_dims(part.length(), part.width(), part.height())
        .with_weight(part.weight())
        .with_quantity(part.quantity())
        .with_stackable(part.stackable());
    if let Some(origin) = part.split_from() {
        rebuilt = rebuilt.with_split_from(origin.clone());
    }
    rebuilt
}

/// Divides a divisible item into parts each within `max_capacity`.
///
/// Returns `None` when the item is not divisible or cannot be split under its
/// minimum part constraints; the caller reports such items as unassigned.
pub fn split_item(item: &CargoItem, max_capacity: f64) -> Option<SplitOutcome> {
    match item.division()? {
        DivisionMode::ByQuantity { min_quantity } => {
            split_by_quantity(item, max_capacity, min_quantity)
        }
        DivisionMode::ByWeight { min_weight } => split_by_weight(item, max_capacity, min_weight),
    }
}
