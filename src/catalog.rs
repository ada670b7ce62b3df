//! # Unit Catalog Module
//!
//! The catalog is the immutable configuration consulted by every other
//! operation in this crate: the declension table mapping a unit to its
//! three grammatical forms, the set of quantity-less units, and the
//! magnitude tier table (g → kg, ml → l). A catalog is built once (as
//! the shared built-in Czech instance, through the builder methods, or
//! from a JSON definition) and passed by reference into the functions
//! that need it. Nothing in the crate keeps hidden mutable state.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_units::UnitCatalog;
//!
//! // The built-in Czech catalog.
//! let catalog = UnitCatalog::czech();
//! assert!(catalog.forms("lžíce").is_some());
//! assert!(catalog.is_quantityless("špetka"));
//!
//! // Or a custom one.
//! let custom = UnitCatalog::new()
//!     .with_declension("kus", ["kus", "kusy", "kusů"])?
//!     .with_tier("g", "kg", 1000.0)?;
//! assert!(custom.tier("g").is_some());
//! # Ok::<(), recipe_units::CatalogError>(())
//! ```

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Declension table of the original Czech application, verbatim.
const CZECH_DECLENSIONS: &[(&str, [&str; 3])] = &[
    ("lžíce", ["lžíce", "lžíce", "lžic"]),
    ("lžička", ["lžička", "lžičky", "lžiček"]),
    ("hrst", ["hrst", "hrsti", "hrstí"]),
    ("plátek", ["plátek", "plátky", "plátků"]),
    ("stroužek", ["stroužek", "stroužky", "stroužků"]),
    ("konzerva", ["konzerva", "konzervy", "konzerv"]),
    ("lístek", ["lístek", "lístky", "lístků"]),
    ("kulička", ["kulička", "kuličky", "kuliček"]),
    ("hrnek", ["hrnek", "hrnky", "hrnků"]),
    ("špetka", ["špetka", "špetky", "špetek"]),
];

/// Units that denote presence rather than a scalable amount.
const CZECH_QUANTITYLESS: &[&str] = &["špetka"];

/// Metric tier pairs: (small unit, large unit, scale factor).
const CZECH_TIERS: &[(&str, &str, f64)] = &[("g", "kg", 1000.0), ("ml", "l", 1000.0)];

/// The three grammatical forms of a unit word.
///
/// Czech declines the unit by the numeral in front of it, with a
/// three-way split rather than the English singular/plural pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitForms {
    /// Form used with exactly one (e.g. "lžička").
    pub one: String,
    /// Form used with counts between one and five (e.g. "lžičky").
    pub few: String,
    /// Form used with five and above, zero and fractional counts
    /// (e.g. "lžiček").
    pub many: String,
}

/// A small→large unit pair crossed at a fixed scale factor.
///
/// The original application uses exactly two tiers, g → kg and ml → l,
/// both at a factor of 1000. Conversion is one hop and one direction:
/// a quantity at or above `scale` is rewritten into `larger_unit`,
/// nothing ever converts downward or chains further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeTier {
    /// Unit the quantity is rewritten into (e.g. "kg").
    pub larger_unit: String,
    /// Threshold and divisor for the rewrite (e.g. 1000.0).
    pub scale: f64,
}

/// JSON definition of a catalog, as accepted by
/// [`UnitCatalog::from_json_str`].
#[derive(Debug, Deserialize)]
struct CatalogDef {
    #[serde(default)]
    declensions: HashMap<String, UnitForms>,
    #[serde(default)]
    quantityless: Vec<String>,
    #[serde(default)]
    tiers: HashMap<String, MagnitudeTier>,
}

/// Errors raised while building a catalog.
///
/// The numeric and display operations themselves are total and never
/// fail; catalog construction is the crate's only fallible surface.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The JSON definition could not be parsed
    Parse(String),
    /// A declension, quantity-less marker or tier entry is invalid
    Validation(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Parse error: {msg}"),
            CatalogError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Immutable lookup tables for unit declension and magnitude conversion.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    declensions: HashMap<String, UnitForms>,
    quantityless: HashSet<String>,
    tiers: HashMap<String, MagnitudeTier>,
}

lazy_static! {
    static ref CZECH_CATALOG: UnitCatalog = build_czech_catalog();
}

fn build_czech_catalog() -> UnitCatalog {
    let mut catalog = UnitCatalog::new();
    for (unit, forms) in CZECH_DECLENSIONS.iter().copied() {
        catalog = catalog
            .with_declension(unit, forms)
            .expect("built-in Czech declension table should be valid");
    }
    for unit in CZECH_QUANTITYLESS.iter().copied() {
        catalog = catalog
            .with_quantityless(unit)
            .expect("built-in Czech quantity-less set should be valid");
    }
    for (unit, larger, scale) in CZECH_TIERS.iter().copied() {
        catalog = catalog
            .with_tier(unit, larger, scale)
            .expect("built-in Czech tier table should be valid");
    }
    catalog
}

impl UnitCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in Czech catalog: the ten declined units of the
    /// original application, "špetka" as quantity-less, and the g → kg
    /// and ml → l tiers at 1000.
    pub fn czech() -> &'static UnitCatalog {
        &CZECH_CATALOG
    }

    /// Register a unit with its three forms `[one, few, many]`.
    pub fn with_declension(mut self, unit: &str, forms: [&str; 3]) -> Result<Self, CatalogError> {
        if unit.is_empty() {
            return Err(CatalogError::Validation(
                "declension unit name is empty".to_string(),
            ));
        }
        if forms.iter().any(|form| form.is_empty()) {
            return Err(CatalogError::Validation(format!(
                "unit '{unit}' has an empty declension form"
            )));
        }
        if self.declensions.contains_key(unit) {
            return Err(CatalogError::Validation(format!(
                "unit '{unit}' is already registered"
            )));
        }
        self.declensions.insert(
            unit.to_string(),
            UnitForms {
                one: forms[0].to_string(),
                few: forms[1].to_string(),
                many: forms[2].to_string(),
            },
        );
        Ok(self)
    }

    /// Mark a unit as quantity-less: it is always displayed in its base
    /// form and denotes presence rather than a scalable amount.
    pub fn with_quantityless(mut self, unit: &str) -> Result<Self, CatalogError> {
        if unit.is_empty() {
            return Err(CatalogError::Validation(
                "quantity-less unit name is empty".to_string(),
            ));
        }
        self.quantityless.insert(unit.to_string());
        Ok(self)
    }

    /// Register a magnitude tier from `unit` up to `larger_unit` crossed
    /// at `scale`.
    pub fn with_tier(
        mut self,
        unit: &str,
        larger_unit: &str,
        scale: f64,
    ) -> Result<Self, CatalogError> {
        if unit.is_empty() || larger_unit.is_empty() {
            return Err(CatalogError::Validation(
                "tier unit name is empty".to_string(),
            ));
        }
        if unit == larger_unit {
            return Err(CatalogError::Validation(format!(
                "tier for '{unit}' maps the unit to itself"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CatalogError::Validation(format!(
                "tier for '{unit}' has a non-positive scale"
            )));
        }
        if self.tiers.contains_key(unit) {
            return Err(CatalogError::Validation(format!(
                "tier for '{unit}' is already registered"
            )));
        }
        self.tiers.insert(
            unit.to_string(),
            MagnitudeTier {
                larger_unit: larger_unit.to_string(),
                scale,
            },
        );
        Ok(self)
    }

    /// Build a catalog from a JSON definition.
    ///
    /// The definition carries up to three sections, all optional:
    ///
    /// ```json
    /// {
    ///   "declensions": { "kus": { "one": "kus", "few": "kusy", "many": "kusů" } },
    ///   "quantityless": ["špetka"],
    ///   "tiers": { "g": { "larger_unit": "kg", "scale": 1000.0 } }
    /// }
    /// ```
    ///
    /// Entries go through the same validation as the builder methods.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = serde_json::from_str(json)?;

        let mut catalog = UnitCatalog::new();
        for (unit, forms) in def.declensions {
            catalog = catalog.with_declension(
                &unit,
                [forms.one.as_str(), forms.few.as_str(), forms.many.as_str()],
            )?;
        }
        for unit in def.quantityless {
            catalog = catalog.with_quantityless(&unit)?;
        }
        for (unit, tier) in def.tiers {
            catalog = catalog.with_tier(&unit, &tier.larger_unit, tier.scale)?;
        }

        debug!(
            "Loaded catalog with {} declined units and {} tiers",
            catalog.declensions.len(),
            catalog.tiers.len()
        );
        Ok(catalog)
    }

    /// Look up the declension forms of a unit.
    pub fn forms(&self, unit: &str) -> Option<&UnitForms> {
        self.declensions.get(unit)
    }

    /// Whether a unit is registered as quantity-less.
    pub fn is_quantityless(&self, unit: &str) -> bool {
        self.quantityless.contains(unit)
    }

    /// Look up the magnitude tier of a unit.
    pub fn tier(&self, unit: &str) -> Option<&MagnitudeTier> {
        self.tiers.get(unit)
    }
}
