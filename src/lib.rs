//! # Recipe Units
//!
//! Quantity and unit engine for a Czech recipe application: unit
//! declension, automatic magnitude conversion (1500 g → 1.5 kg), portion
//! scaling, shopping-cart ingredient merging, and plain-text shopping
//! list export for QR codes.
//!
//! The engine is a pure library with no I/O and no shared state. The
//! recipe detail view and the cart view hand in ingredient lists and get
//! new lists back; the caller's data is never mutated.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_units::{merge_ingredients, scale_portions, Ingredient, UnitCatalog};
//!
//! let catalog = UnitCatalog::czech();
//!
//! // Rescale a two-portion recipe to six portions.
//! let recipe = vec![Ingredient::new("mouka", 200.0, "g")];
//! let scaled = scale_portions(catalog, &recipe, 2, 6);
//! assert_eq!(scaled[0].quantity, Some(600.0));
//!
//! // Merge a cart gathered from several recipes.
//! let cart = vec![
//!     Ingredient::new("mouka", 600.0, "g"),
//!     Ingredient::new("mouka", 600.0, "g"),
//! ];
//! let merged = merge_ingredients(catalog, &cart);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].unit, "kg");
//! ```

pub mod catalog;
pub mod declension;
pub mod export;
pub mod ingredient;
pub mod magnitude;
pub mod merge;
pub mod scaling;

// Re-export types for easier access
pub use catalog::{CatalogError, MagnitudeTier, UnitCatalog, UnitForms};
pub use declension::decline_unit;
pub use export::{remove_diacritics, shopping_list_lines, shopping_list_text};
pub use ingredient::Ingredient;
pub use magnitude::{normalize_magnitude, Measure};
pub use merge::merge_ingredients;
pub use scaling::{scale_portions, DEFAULT_PORTIONS};
