//! # Magnitude Normalization Module
//!
//! Rewrites a (quantity, unit) pair into the next larger metric tier
//! once the quantity crosses the tier threshold, so the UI shows
//! "1.5 kg" instead of "1500 g". Conversion is a single hop upward and
//! never cascades or converts downward.

use crate::catalog::UnitCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quantity paired with its unit, the normalizer's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub quantity: f64,
    pub unit: String,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

/// Rewrite `quantity` of `unit` in the largest natural unit.
///
/// If the unit has a registered tier and the quantity is at or above the
/// tier scale, the quantity is divided by the scale and paired with the
/// larger unit; otherwise both pass through unchanged. Applying the
/// function to its own output is a no-op with the built-in catalog,
/// since the large-tier units (kg, l) carry no tier of their own.
///
/// Callers compute raw quantities first (scaled amounts, merged sums)
/// and normalize last; normalizing operands before summation would mix
/// tiers (900 g + 900 g must become 1800 g, then 1.8 kg).
pub fn normalize_magnitude(catalog: &UnitCatalog, quantity: f64, unit: &str) -> Measure {
    match catalog.tier(unit) {
        Some(tier) if quantity >= tier.scale => Measure {
            quantity: quantity / tier.scale,
            unit: tier.larger_unit.clone(),
        },
        _ => Measure {
            quantity,
            unit: unit.to_string(),
        },
    }
}
