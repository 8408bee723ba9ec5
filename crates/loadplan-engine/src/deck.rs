//! 2D deck placement engine.
//!
//! Packs a set of items already committed to one truck into non-overlapping
//! positions on the deck plane. Larger footprints are placed first; each item
//! tries both orientations over a grid of candidate front-left corners and
//! takes the highest-scoring collision-free candidate. An item with no valid
//! candidate is reported as unplaced — there is no fallback position.

use crate::config::PlannerConfig;
use loadplan_core::{CargoItem, ItemId, Placement, Rect, TruckType};

/// Placement outcome for one truck's item set.
#[derive(Debug, Clone, Default)]
pub struct DeckPlan {
    /// One placement per successfully placed item.
    pub placements: Vec<Placement>,
    /// Ids of items with no valid placement.
    pub unplaced: Vec<ItemId>,
}

impl DeckPlan {
    /// Returns true if every item received a placement.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Grid step for the deck, coarsened from the base step when the cell count
/// would exceed the configured budget.
fn effective_step(truck: &TruckType, config: &PlannerConfig) -> f64 {
    let mut step = config.grid_step;
    let cells = |s: f64| ((truck.deck_length / s) * (truck.deck_width / s)) as usize;
    while cells(step) > config.max_grid_cells {
        step *= 2.0;
    }
    if step > config.grid_step {
        log::warn!(
            "deck scan for truck '{}' coarsened from {} to {} to stay within {} cells",
            truck.id,
            config.grid_step,
            step,
            config.max_grid_cells
        );
    }
    step
}

/// Candidate corner coordinates along one axis: grid positions plus the exact
/// flush-to-the-far-edge position.
fn axis_positions(limit: f64, step: f64, epsilon: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    if limit < -epsilon {
        return positions;
    }
    let mut x = 0.0;
    while x <= limit + epsilon {
        positions.push(x.min(limit.max(0.0)));
        x += step;
    }
    let flush = limit.max(0.0);
    if positions.last().map_or(true, |&p| flush - p > epsilon) {
        positions.push(flush);
    }
    positions
}

fn candidate_score(
    rect: &Rect,
    truck: &TruckType,
    occupied: &[Rect],
    config: &PlannerConfig,
) -> f64 {
    let tol = config.adjacency_tolerance;
    let mut score = -0.5 * rect.x - 0.3 * rect.z;

    if rect.z <= tol {
        score += 5.0;
    }
    if (truck.deck_width - rect.z_end()).abs() <= tol {
        score += 5.0;
    }
    if rect.x <= tol {
        score += 10.0;
    }

    for other in occupied {
        if rect.adjacent(other, tol) {
            score += 3.0;
        }
    }

    score
}

/// Finds the best collision-free placement for one item given the already
/// occupied rectangles, or `None` if no candidate exists.
fn place_item(
    item: &CargoItem,
    truck: &TruckType,
    occupied: &[Rect],
    step: f64,
    config: &PlannerConfig,
) -> Option<Placement> {
    let eps = config.epsilon;
    let mut orientations = vec![(item.length(), item.width(), false)];
    if (item.length() - item.width()).abs() > eps {
        orientations.push((item.width(), item.length(), true));
    }

    let mut best: Option<(f64, Placement)> = None;

    for (len, wid, rotated) in orientations {
        if len > truck.deck_length + eps || wid > truck.deck_width + eps {
            continue;
        }

        for &x in &axis_positions(truck.deck_length - len, step, eps) {
            for &z in &axis_positions(truck.deck_width - wid, step, eps) {
                let rect = Rect::new(x, z, len, wid);
                if !rect.within_deck(truck.deck_length, truck.deck_width, eps) {
                    continue;
                }
                if occupied.iter().any(|o| rect.overlaps(o, eps)) {
                    continue;
                }

                let score = candidate_score(&rect, truck, occupied, config);
                let better = match &best {
                    None => true,
                    Some((best_score, _)) => score > *best_score + 1e-9,
                };
                if better {
                    best = Some((score, Placement::new(item.id().clone(), x, z, rotated)));
                }
            }
        }
    }

    best.map(|(_, placement)| placement)
}

/// Packs `items` onto the truck's deck.
///
/// Items are processed by footprint area descending (stable id tie-break) so
/// large pieces claim space first. Returns the placements found plus the ids
/// of any items that could not be placed.
pub fn pack_deck(items: &[CargoItem], truck: &TruckType, config: &PlannerConfig) -> DeckPlan {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .footprint_area()
            .total_cmp(&items[a].footprint_area())
            .then_with(|| items[a].id().cmp(items[b].id()))
    });

    let step = effective_step(truck, config);
    let mut plan = DeckPlan::default();
    let mut occupied: Vec<Rect> = Vec::new();

    for idx in order {
        let item = &items[idx];
        match place_item(item, truck, &occupied, step, config) {
            Some(placement) => {
                occupied.push(placement.rect(item));
                plan.placements.push(placement);
            }
            None => plan.unplaced.push(item.id().clone()),
        }
    }

    plan
}
