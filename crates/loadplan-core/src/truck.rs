//! Truck type catalog.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a truck type.
pub type TruckId = String;

/// How cargo is loaded onto the trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadingMethod {
    /// Self-propelled equipment drives on via ramps or a detachable gooseneck.
    DriveOn,
    /// Cargo is lifted onto the deck.
    CraneLoad,
}

/// Broad trailer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TruckCategory {
    /// Flat open deck at standard height.
    Flatbed,
    /// Two-level deck with a lowered main section.
    StepDeck,
    /// Low well between the axle groups.
    Lowboy,
    /// Heavy-haul trailer with extra axles.
    HeavyHaul,
}

/// An immutable trailer specification.
///
/// Deck dimensions and weights use the same units as [`CargoItem`]
/// (feet and pounds in the standard catalog).
///
/// [`CargoItem`]: crate::CargoItem
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckType {
    /// Unique identifier.
    pub id: TruckId,
    /// Display name.
    pub name: String,
    /// Trailer category.
    pub category: TruckCategory,
    /// Usable deck length.
    pub deck_length: f64,
    /// Usable deck width.
    pub deck_width: f64,
    /// Deck height above ground (adds to cargo height for legal checks).
    pub deck_height: f64,
    /// Maximum cargo weight the trailer may carry.
    pub max_cargo_weight: f64,
    /// Empty trailer weight (counts toward legal gross weight).
    pub tare_weight: f64,
    /// Loading method.
    pub loading: LoadingMethod,
}

impl TruckType {
    fn validate(&self) -> Result<()> {
        if self.deck_length <= 0.0 || self.deck_width <= 0.0 || self.deck_height <= 0.0 {
            return Err(Error::InvalidTruck(format!(
                "truck '{}' has non-positive deck dimensions",
                self.id
            )));
        }
        if self.max_cargo_weight <= 0.0 || self.tare_weight <= 0.0 {
            return Err(Error::InvalidTruck(format!(
                "truck '{}' has non-positive weights",
                self.id
            )));
        }
        Ok(())
    }
}

/// Immutable, ordered table of truck types.
///
/// Catalog order is significant: the evaluator resolves score ties to the
/// first truck encountered.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckCatalog {
    trucks: Vec<TruckType>,
}

impl TruckCatalog {
    /// Creates a catalog from an ordered list of truck types.
    pub fn new(trucks: Vec<TruckType>) -> Result<Self> {
        if trucks.is_empty() {
            return Err(Error::InvalidTruck("catalog is empty".to_string()));
        }
        for truck in &trucks {
            truck.validate()?;
        }
        Ok(Self { trucks })
    }

    /// Built-in catalog of common open-deck trailers (feet / pounds).
    pub fn standard() -> Self {
        Self {
            trucks: vec![
                TruckType {
                    id: "flatbed-48".to_string(),
                    name: "48' Flatbed".to_string(),
                    category: TruckCategory::Flatbed,
                    deck_length: 48.0,
                    deck_width: 8.5,
                    deck_height: 5.0,
                    max_cargo_weight: 48000.0,
                    tare_weight: 13500.0,
                    loading: LoadingMethod::CraneLoad,
                },
                TruckType {
                    id: "stepdeck-53".to_string(),
                    name: "53' Step Deck".to_string(),
                    category: TruckCategory::StepDeck,
                    deck_length: 53.0,
                    deck_width: 8.5,
                    deck_height: 3.5,
                    max_cargo_weight: 46500.0,
                    tare_weight: 15000.0,
                    loading: LoadingMethod::CraneLoad,
                },
                TruckType {
                    id: "doubledrop-29".to_string(),
                    name: "29' Double Drop".to_string(),
                    category: TruckCategory::Lowboy,
                    deck_length: 29.0,
                    deck_width: 8.5,
                    deck_height: 1.8,
                    max_cargo_weight: 40000.0,
                    tare_weight: 19500.0,
                    loading: LoadingMethod::CraneLoad,
                },
                TruckType {
                    id: "rgn-29".to_string(),
                    name: "29' RGN Lowboy".to_string(),
                    category: TruckCategory::Lowboy,
                    deck_length: 29.0,
                    deck_width: 8.5,
                    deck_height: 1.5,
                    max_cargo_weight: 42000.0,
                    tare_weight: 21000.0,
                    loading: LoadingMethod::DriveOn,
                },
                TruckType {
                    id: "rgn-multi-35".to_string(),
                    name: "35' Multi-Axle RGN".to_string(),
                    category: TruckCategory::HeavyHaul,
                    deck_length: 35.0,
                    deck_width: 8.5,
                    deck_height: 1.5,
                    max_cargo_weight: 55000.0,
                    tare_weight: 26000.0,
                    loading: LoadingMethod::DriveOn,
                },
            ],
        }
    }

    /// Returns the trucks in catalog order.
    pub fn trucks(&self) -> &[TruckType] {
        &self.trucks
    }

    /// Looks up a truck type by id.
    pub fn get(&self, id: &str) -> Option<&TruckType> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Maximum cargo capacity across the catalog.
    pub fn max_cargo_capacity(&self) -> f64 {
        self.trucks
            .iter()
            .map(|t| t.max_cargo_weight)
            .fold(0.0, f64::max)
    }

    /// Number of truck types.
    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    /// Returns true if the catalog has no trucks.
    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }
}
