//! Fit and legality evaluation against the truck catalog.

use loadplan_core::{CargoItem, LegalLimits, LoadingMethod, TruckCatalog, TruckLoad, TruckType};

/// Description keywords identifying self-propelled equipment, which favors
/// drive-on trailers.
const SELF_PROPELLED_KEYWORDS: &[&str] = &[
    "excavator",
    "dozer",
    "bulldozer",
    "loader",
    "grader",
    "roller",
    "crane",
    "tractor",
    "forklift",
    "harvester",
    "self-propelled",
];

/// Dimension/weight view of either a single item or a whole truckload's
/// aggregate (the "virtual item" used when re-scoring a grown load).
#[derive(Debug, Clone)]
pub struct ItemView {
    /// Description, matched against equipment keywords.
    pub description: String,
    /// Footprint length.
    pub length: f64,
    /// Footprint width.
    pub width: f64,
    /// Height above deck.
    pub height: f64,
    /// Total weight across units.
    pub total_weight: f64,
}

impl ItemView {
    /// View of a single cargo item.
    pub fn of_item(item: &CargoItem) -> Self {
        Self {
            description: item.description().to_string(),
            length: item.length(),
            width: item.width(),
            height: item.height(),
            total_weight: item.total_weight(),
        }
    }

    /// Aggregate view of a truckload (max dimensions, summed weight).
    ///
    /// The aggregate never matches equipment keywords; only geometry and
    /// weight participate in re-scoring.
    pub fn of_load(load: &TruckLoad) -> Self {
        Self {
            description: String::new(),
            length: load.max_length,
            width: load.max_width,
            height: load.max_height,
            total_weight: load.total_weight,
        }
    }
}

/// Outcome of evaluating an item against the catalog.
#[derive(Debug, Clone)]
pub struct TruckFit {
    /// The winning truck type.
    pub truck: TruckType,
    /// Suitability score (higher is better).
    pub score: i32,
    /// True when no permits are required.
    pub is_legal: bool,
    /// Permit descriptions, one per violated threshold.
    pub permits: Vec<String>,
}

/// Returns whether the view physically fits the truck, independent of other
/// cargo: length, width, and weight each within the deck/capacity.
pub fn fits_truck(view: &ItemView, truck: &TruckType) -> bool {
    view.length <= truck.deck_length
        && view.width <= truck.deck_width
        && view.total_weight <= truck.max_cargo_weight
}

/// Permit descriptions and legality for the view on the given truck.
pub fn check_legality(view: &ItemView, truck: &TruckType, limits: &LegalLimits) -> Vec<String> {
    let mut permits = Vec::new();

    let total_height = view.height + truck.deck_height;
    if total_height > limits.max_height {
        permits.push(format!(
            "Oversize height permit: {:.1} ft total exceeds {:.1} ft limit",
            total_height, limits.max_height
        ));
    }

    if view.width > limits.max_width {
        permits.push(format!(
            "Oversize width permit: {:.1} ft exceeds {:.1} ft limit",
            view.width, limits.max_width
        ));
    }

    let gross = view.total_weight + truck.tare_weight + limits.tractor_weight;
    if gross > limits.max_gross_weight {
        permits.push(format!(
            "Overweight permit: {:.0} lbs gross exceeds {:.0} lbs limit",
            gross, limits.max_gross_weight
        ));
    }

    permits
}

fn matches_equipment_keywords(description: &str) -> bool {
    let lower = description.to_lowercase();
    SELF_PROPELLED_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn score_truck(view: &ItemView, truck: &TruckType, limits: &LegalLimits, permits: &[String]) -> i32 {
    let mut score = 100;

    score -= 15 * permits.len() as i32;

    // Height clearance: penalize gross over-capacity, reward a snug fit.
    let clearance = limits.max_height - (view.height + truck.deck_height);
    if clearance > 4.0 {
        score -= 10;
    } else if (0.0..=2.0).contains(&clearance) {
        score += 10;
    }

    if truck.loading == LoadingMethod::DriveOn && matches_equipment_keywords(&view.description) {
        score += 15;
    }

    if permits.is_empty() {
        score += 20;
    }

    score
}

/// Scores the view against one specific truck (used when the user forces a
/// truck type), regardless of whether that truck would win catalog-wide.
pub fn evaluate_on_truck(view: &ItemView, truck: &TruckType, limits: &LegalLimits) -> TruckFit {
    let permits = check_legality(view, truck, limits);
    let score = score_truck(view, truck, limits, &permits);
    TruckFit {
        truck: truck.clone(),
        score,
        is_legal: permits.is_empty(),
        permits,
    }
}

/// Scores the view against every catalog truck and returns the best fit.
///
/// Only trucks the view physically fits are considered. The strictly highest
/// score wins; ties resolve to the first truck in catalog order. Returns
/// `None` when no truck fits at all.
pub fn evaluate(view: &ItemView, catalog: &TruckCatalog, limits: &LegalLimits) -> Option<TruckFit> {
    let mut best: Option<TruckFit> = None;

    for truck in catalog.trucks() {
        if !fits_truck(view, truck) {
            continue;
        }

        let permits = check_legality(view, truck, limits);
        let score = score_truck(view, truck, limits, &permits);

        let better = match &best {
            None => true,
            Some(fit) => score > fit.score,
        };
        if better {
            best = Some(TruckFit {
                truck: truck.clone(),
                score,
                is_legal: permits.is_empty(),
                permits,
            });
        }
    }

    best
}
