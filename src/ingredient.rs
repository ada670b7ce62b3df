//! # Ingredient Data Model
//!
//! This module defines the ingredient value type shared by the scaling,
//! merging and export operations. An ingredient is a plain
//! (name, quantity, unit) record; the quantity is optional so that entries
//! stored without an amount (a pinch of salt, an unchecked cart
//! placeholder) survive deserialization instead of failing it.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_units::Ingredient;
//!
//! let flour = Ingredient::new("mouka", 200.0, "g");
//! let salt = Ingredient::unmeasured("sůl", "špetka");
//!
//! assert!(flour.has_quantity());
//! assert!(!salt.has_quantity());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ingredient line as stored on a recipe or in the shopping cart.
///
/// Values are treated as immutable once constructed: every transformation
/// in this crate returns new `Ingredient` values and leaves its input
/// untouched, so repeated or interleaved calls never observe partial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name (e.g. "mouka", "vejce"). Merge identity is exact,
    /// case-sensitive string equality on this field.
    pub name: String,

    /// Amount expressed in `unit`. `None` models entries persisted with a
    /// `null` or missing amount; such entries are excluded from merging
    /// and passed through unchanged by scaling.
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Unit string from an open vocabulary. Only units registered in a
    /// [`UnitCatalog`](crate::UnitCatalog) are declined or converted;
    /// any other string passes through unchanged.
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient with a quantity.
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: Some(quantity),
            unit: unit.to_string(),
        }
    }

    /// Create an ingredient without a quantity (e.g. "špetka soli").
    pub fn unmeasured(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
            unit: unit.to_string(),
        }
    }

    /// Whether this ingredient carries an amount.
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(quantity) => write!(f, "{} {} {}", self.name, quantity, self.unit),
            None => write!(f, "{} {}", self.name, self.unit),
        }
    }
}
