//! Deck placements and rectangle math.

use crate::item::{CargoItem, ItemId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of one item on a trailer deck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Id of the placed item.
    pub item_id: ItemId,

    /// Distance from the trailer front.
    pub x: f64,

    /// Distance from the left deck edge.
    pub z: f64,

    /// True if the item's length/width axes are swapped on the deck.
    pub rotated: bool,
}

impl Placement {
    /// Creates a placement.
    pub fn new(item_id: impl Into<ItemId>, x: f64, z: f64, rotated: bool) -> Self {
        Self {
            item_id: item_id.into(),
            x,
            z,
            rotated,
        }
    }

    /// Returns the rectangle occupied by `item` under this placement.
    pub fn rect(&self, item: &CargoItem) -> Rect {
        let (len, wid) = if self.rotated {
            (item.width(), item.length())
        } else {
            (item.length(), item.width())
        };
        Rect::new(self.x, self.z, len, wid)
    }
}

/// Axis-aligned rectangle on the deck plane (x along the trailer, z across).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Front edge (distance from trailer front).
    pub x: f64,
    /// Left edge (distance from left deck edge).
    pub z: f64,
    /// Extent along the trailer axis.
    pub len: f64,
    /// Extent across the deck.
    pub wid: f64,
}

impl Rect {
    /// Creates a rectangle from its front-left corner and extents.
    pub fn new(x: f64, z: f64, len: f64, wid: f64) -> Self {
        Self { x, z, len, wid }
    }

    /// Rear edge coordinate.
    pub fn x_end(&self) -> f64 {
        self.x + self.len
    }

    /// Right edge coordinate.
    pub fn z_end(&self) -> f64 {
        self.z + self.wid
    }

    /// Axis-aligned overlap test with tolerance.
    ///
    /// Edges touching within `epsilon` do not count as overlap, so items may
    /// sit flush against each other.
    pub fn overlaps(&self, other: &Rect, epsilon: f64) -> bool {
        self.x < other.x_end() - epsilon
            && other.x < self.x_end() - epsilon
            && self.z < other.z_end() - epsilon
            && other.z < self.z_end() - epsilon
    }

    /// Returns true if this rectangle lies within a deck of the given size.
    pub fn within_deck(&self, deck_length: f64, deck_width: f64, epsilon: f64) -> bool {
        self.x >= -epsilon
            && self.z >= -epsilon
            && self.x_end() <= deck_length + epsilon
            && self.z_end() <= deck_width + epsilon
    }

    /// Returns true if the rectangles share an edge (within tolerance) on
    /// either axis while their projections on the other axis intersect.
    pub fn adjacent(&self, other: &Rect, tolerance: f64) -> bool {
        let x_ranges_meet = self.x <= other.x_end() + tolerance && other.x <= self.x_end() + tolerance;
        let z_ranges_meet = self.z <= other.z_end() + tolerance && other.z <= self.z_end() + tolerance;

        let x_edge = (self.x_end() - other.x).abs() <= tolerance
            || (other.x_end() - self.x).abs() <= tolerance;
        let z_edge = (self.z_end() - other.z).abs() <= tolerance
            || (other.z_end() - self.z).abs() <= tolerance;

        (x_edge && z_ranges_meet) || (z_edge && x_ranges_meet)
    }
}
