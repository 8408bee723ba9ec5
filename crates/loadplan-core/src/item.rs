//! Cargo item types.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a cargo item.
pub type ItemId = String;

/// How a divisible item may be split across trucks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivisionMode {
    /// Split by discrete unit count, never below `min_quantity` units per part.
    ByQuantity {
        /// Minimum units a split part may carry.
        min_quantity: u32,
    },
    /// Split by continuous weight, never below `min_weight` per part.
    ByWeight {
        /// Minimum weight a split part may carry.
        min_weight: f64,
    },
}

/// Back-reference carried by generated split parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitOrigin {
    /// Id of the item this part was split from.
    pub original_id: ItemId,
    /// 1-based index of this part within the split group.
    pub part_index: u32,
    /// Total number of parts in the group (set once all parts are known).
    pub total_parts: u32,
}

/// A cargo item to be planned onto one or more trucks.
///
/// Dimensions are the deck-plane footprint (`length` along the trailer,
/// `width` across it) plus `height`; `weight` is per unit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoItem {
    /// Unique identifier.
    id: ItemId,

    /// Free-text description (used for self-propelled equipment matching).
    description: String,

    /// Number of units.
    quantity: u32,

    /// Footprint length along the trailer axis.
    length: f64,

    /// Footprint width across the trailer.
    width: f64,

    /// Height above the deck.
    height: f64,

    /// Weight per unit.
    weight: f64,

    /// Whether another stackable item may sit on top of this one.
    stackable: bool,

    /// Whether the item may be divided across trucks.
    division: Option<DivisionMode>,

    /// Set on generated split parts only.
    split_from: Option<SplitOrigin>,
}

impl CargoItem {
    /// Creates a new cargo item with the given id and description.
    pub fn new(id: impl Into<ItemId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity: 1,
            length: 0.0,
            width: 0.0,
            height: 0.0,
            weight: 0.0,
            stackable: false,
            division: None,
            split_from: None,
        }
    }

    /// Sets the footprint and height (length, width, height).
    pub fn with_dims(mut self, length: f64, width: f64, height: f64) -> Self {
        self.length = length;
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the per-unit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the unit quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Marks the item as stackable.
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Marks the item as divisible with the given mode.
    pub fn with_division(mut self, mode: DivisionMode) -> Self {
        self.division = Some(mode);
        self
    }

    /// Sets the split back-reference (used by the splitter for generated parts).
    pub fn with_split_from(mut self, origin: SplitOrigin) -> Self {
        self.split_from = Some(origin);
        self
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the footprint length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the footprint width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height above deck.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the per-unit weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns whether the item is stackable.
    pub fn stackable(&self) -> bool {
        self.stackable
    }

    /// Returns whether the item is divisible.
    pub fn divisible(&self) -> bool {
        self.division.is_some()
    }

    /// Returns the division mode, if any.
    pub fn division(&self) -> Option<DivisionMode> {
        self.division
    }

    /// Returns the split back-reference, if this is a generated part.
    pub fn split_from(&self) -> Option<&SplitOrigin> {
        self.split_from.as_ref()
    }

    /// Sets the total part count on a generated split part.
    pub fn set_total_parts(&mut self, total: u32) {
        if let Some(origin) = self.split_from.as_mut() {
            origin.total_parts = total;
        }
    }

    /// Sets the quantity in place (used when merging an undersized remainder).
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Sets the per-unit weight in place (used when merging an undersized remainder).
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Total weight across all units.
    pub fn total_weight(&self) -> f64 {
        self.weight * self.quantity as f64
    }

    /// Deck footprint area.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Validates dimensions, weight, and quantity.
    ///
    /// Zero or negative values are rejected rather than producing degenerate
    /// placements downstream.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "item '{}' has non-positive dimensions {}x{}x{}",
                self.id, self.length, self.width, self.height
            )));
        }
        if self.weight <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "item '{}' has non-positive weight {}",
                self.id, self.weight
            )));
        }
        if self.quantity == 0 {
            return Err(Error::InvalidItem(format!(
                "item '{}' has zero quantity",
                self.id
            )));
        }
        if let Some(DivisionMode::ByWeight { min_weight }) = self.division {
            if min_weight <= 0.0 {
                return Err(Error::InvalidItem(format!(
                    "item '{}' has non-positive minimum split weight {}",
                    self.id, min_weight
                )));
            }
        }
        if let Some(DivisionMode::ByQuantity { min_quantity }) = self.division {
            if min_quantity == 0 {
                return Err(Error::InvalidItem(format!(
                    "item '{}' has zero minimum split quantity",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
