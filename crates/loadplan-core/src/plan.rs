//! Truckload plan types.

use crate::item::{CargoItem, ItemId};
use crate::placement::Placement;
use crate::truck::TruckType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a split group was divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplitMode {
    /// Divided by discrete unit count.
    ByQuantity,
    /// Divided by continuous weight.
    ByWeight,
}

/// Record of one item divided across trucks, retained for reporting.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitItemGroup {
    /// Id of the original item.
    pub original_id: ItemId,
    /// Ids of the generated parts, in split order.
    pub parts: Vec<ItemId>,
    /// Division mode used.
    pub mode: SplitMode,
    /// Number of parts.
    pub total_parts: u32,
}

/// An item that could not be assigned to any truck, with the reason.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnassignedItem {
    /// The item (or split part) left unassigned.
    pub item: CargoItem,
    /// Human-readable reason.
    pub reason: String,
}

/// One truck's worth of a plan.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckLoad {
    /// Sequential load number (1-based, renumbered after every pass).
    pub number: u32,

    /// Items assigned to this truck.
    pub items: Vec<CargoItem>,

    /// Longest item footprint length.
    pub max_length: f64,

    /// Widest item footprint width.
    pub max_width: f64,

    /// Tallest item height.
    pub max_height: f64,

    /// Total cargo weight across all items and units.
    pub total_weight: f64,

    /// Chosen truck type. Invariant: `total_weight <= truck.max_cargo_weight`.
    pub truck: TruckType,

    /// Suitability score from the fit evaluator.
    pub suitability_score: i32,

    /// One placement per item.
    pub placements: Vec<Placement>,

    /// Permit descriptions required for this load.
    pub permits_required: Vec<String>,

    /// Free-text warnings (escort requirements, legality notes).
    pub warnings: Vec<String>,

    /// True when no permits are required.
    pub is_legal: bool,
}

impl TruckLoad {
    /// Creates an empty load on the given truck.
    pub fn new(number: u32, truck: TruckType) -> Self {
        Self {
            number,
            items: Vec::new(),
            max_length: 0.0,
            max_width: 0.0,
            max_height: 0.0,
            total_weight: 0.0,
            truck,
            suitability_score: 0,
            placements: Vec::new(),
            permits_required: Vec::new(),
            warnings: Vec::new(),
            is_legal: true,
        }
    }

    /// Recomputes aggregate dimensions and total weight from the item list.
    pub fn recompute_aggregates(&mut self) {
        self.max_length = 0.0;
        self.max_width = 0.0;
        self.max_height = 0.0;
        self.total_weight = 0.0;
        for item in &self.items {
            self.max_length = self.max_length.max(item.length());
            self.max_width = self.max_width.max(item.width());
            self.max_height = self.max_height.max(item.height());
            self.total_weight += item.total_weight();
        }
    }

    /// Weight utilization as a fraction of the truck's cargo capacity.
    pub fn utilization(&self) -> f64 {
        self.total_weight / self.truck.max_cargo_weight
    }

    /// Total unit count across all items.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity()).sum()
    }

    /// Returns the load's smallest item by total weight, if any.
    pub fn lightest_item_index(&self) -> Option<usize> {
        (0..self.items.len()).min_by(|&a, &b| {
            self.items[a]
                .total_weight()
                .total_cmp(&self.items[b].total_weight())
                .then_with(|| self.items[a].id().cmp(self.items[b].id()))
        })
    }
}

/// Summary totals for a plan.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Number of trucks used.
    pub truck_count: usize,
    /// Total assigned cargo weight.
    pub total_weight: f64,
    /// Total assigned item count (split parts count individually).
    pub total_items: usize,
}

/// Complete output of a planning run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    /// Truckloads in output order.
    pub loads: Vec<TruckLoad>,

    /// Summary totals.
    pub summary: PlanSummary,

    /// Items that could not be assigned to any truck.
    pub unassigned: Vec<UnassignedItem>,

    /// Split groups generated during planning.
    pub split_groups: Vec<SplitItemGroup>,

    /// Flat list of all warnings (load-level plus item-level).
    pub warnings: Vec<String>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self {
            loads: Vec::new(),
            summary: PlanSummary::default(),
            unassigned: Vec::new(),
            split_groups: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if every input item was assigned.
    pub fn all_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Renumbers loads sequentially and refreshes summary totals.
    pub fn refresh(&mut self) {
        for (i, load) in self.loads.iter_mut().enumerate() {
            load.number = (i + 1) as u32;
        }
        self.summary = PlanSummary {
            truck_count: self.loads.len(),
            total_weight: self.loads.iter().map(|l| l.total_weight).sum(),
            total_items: self.loads.iter().map(|l| l.items.len()).sum(),
        };
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truck::TruckCatalog;

    fn load_with_items() -> TruckLoad {
        let truck = TruckCatalog::standard().trucks()[0].clone();
        let mut load = TruckLoad::new(1, truck);
        load.items.push(
            CargoItem::new("A", "press")
                .with_dims(12.0, 6.0, 7.0)
                .with_weight(20000.0),
        );
        load.items.push(
            CargoItem::new("B", "beam")
                .with_dims(30.0, 2.0, 2.0)
                .with_weight(4000.0)
                .with_quantity(2),
        );
        load.recompute_aggregates();
        load
    }

    #[test]
    fn test_recompute_aggregates() {
        let load = load_with_items();
        assert!((load.max_length - 30.0).abs() < 1e-9);
        assert!((load.max_width - 6.0).abs() < 1e-9);
        assert!((load.max_height - 7.0).abs() < 1e-9);
        assert!((load.total_weight - 28000.0).abs() < 1e-9);
        assert_eq!(load.unit_count(), 3);
    }

    #[test]
    fn test_utilization_and_lightest() {
        let load = load_with_items();
        assert!((load.utilization() - 28000.0 / 48000.0).abs() < 1e-9);
        // B totals 8000 vs A's 20000
        assert_eq!(load.lightest_item_index(), Some(1));
    }

    #[test]
    fn test_plan_refresh() {
        let mut plan = Plan::new();
        plan.loads.push(load_with_items());
        plan.loads.push(load_with_items());
        plan.loads[1].number = 99;
        plan.refresh();

        assert_eq!(plan.loads[0].number, 1);
        assert_eq!(plan.loads[1].number, 2);
        assert_eq!(plan.summary.truck_count, 2);
        assert_eq!(plan.summary.total_items, 4);
        assert!((plan.summary.total_weight - 56000.0).abs() < 1e-9);
        assert!(plan.all_assigned());
    }
}
