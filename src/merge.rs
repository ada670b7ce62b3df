//! # Ingredient Merging Module
//!
//! Collapses a flat ingredient list, typically gathered from several
//! recipes' cart selections, into one shopping list with a single line
//! per distinct (name, unit) pair. Quantities are summed first and
//! magnitude-normalized after, so 600 g + 600 g of flour comes out as
//! one 1.2 kg line rather than two or a mixed-tier sum.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_units::{merge_ingredients, Ingredient, UnitCatalog};
//!
//! let catalog = UnitCatalog::czech();
//! let cart = vec![
//!     Ingredient::new("mouka", 600.0, "g"),
//!     Ingredient::new("vejce", 2.0, "ks"),
//!     Ingredient::new("mouka", 600.0, "g"),
//! ];
//!
//! let merged = merge_ingredients(catalog, &cart);
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].quantity, Some(1.2));
//! assert_eq!(merged[0].unit, "kg");
//! ```

use crate::catalog::UnitCatalog;
use crate::ingredient::Ingredient;
use crate::magnitude::normalize_magnitude;
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Merge duplicate ingredients and normalize the summed quantities.
///
/// Accumulation is keyed by the exact (name, unit) string pair; the
/// first occurrence of a key fixes its position in the output, so the
/// result order is deterministic for a given input order. Entries with
/// no quantity are excluded entirely: they were either checked off
/// upstream or never carried an amount. Zero quantities are kept and
/// summed like any other.
///
/// The same ingredient in different units never merges; "200 g" and
/// "2 hrnky" of flour stay separate lines.
///
/// Merging an already-merged list yields it unchanged: keys are unique
/// after the first pass and normalization is a no-op on its own output.
pub fn merge_ingredients(catalog: &UnitCatalog, ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut merged: Vec<Ingredient> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();

    for ingredient in ingredients {
        let quantity = match ingredient.quantity {
            Some(quantity) => quantity,
            None => {
                trace!("Skipping '{}' with no quantity", ingredient.name);
                continue;
            }
        };

        match positions.entry((ingredient.name.clone(), ingredient.unit.clone())) {
            Entry::Occupied(slot) => {
                let line = &mut merged[*slot.get()];
                line.quantity = Some(line.quantity.unwrap_or(0.0) + quantity);
            }
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(ingredient.clone());
            }
        }
    }

    debug!(
        "Merged {} cart entries into {} shopping list lines",
        ingredients.len(),
        merged.len()
    );

    merged
        .into_iter()
        .map(|ingredient| match ingredient.quantity {
            Some(quantity) => {
                let measure = normalize_magnitude(catalog, quantity, &ingredient.unit);
                Ingredient {
                    name: ingredient.name,
                    quantity: Some(measure.quantity),
                    unit: measure.unit,
                }
            }
            None => ingredient,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_then_normalizes() {
        let catalog = UnitCatalog::czech();
        let cart = vec![
            Ingredient::new("mouka", 600.0, "g"),
            Ingredient::new("mouka", 600.0, "g"),
        ];

        let merged = merge_ingredients(catalog, &cart);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], Ingredient::new("mouka", 1.2, "kg"));
    }

    #[test]
    fn test_different_units_stay_separate() {
        let catalog = UnitCatalog::czech();
        let cart = vec![
            Ingredient::new("mouka", 200.0, "g"),
            Ingredient::new("mouka", 1.0, "kg"),
        ];

        let merged = merge_ingredients(catalog, &cart);

        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_missing_quantities_are_excluded() {
        let catalog = UnitCatalog::czech();
        let cart = vec![
            Ingredient::unmeasured("sůl", "špetka"),
            Ingredient::new("cukr", 50.0, "g"),
        ];

        let merged = merge_ingredients(catalog, &cart);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "cukr");
    }

    #[test]
    fn test_first_occurrence_fixes_order() {
        let catalog = UnitCatalog::czech();
        let cart = vec![
            Ingredient::new("cukr", 50.0, "g"),
            Ingredient::new("mouka", 200.0, "g"),
            Ingredient::new("cukr", 30.0, "g"),
        ];

        let merged = merge_ingredients(catalog, &cart);

        assert_eq!(merged[0].name, "cukr");
        assert_eq!(merged[0].quantity, Some(80.0));
        assert_eq!(merged[1].name, "mouka");
    }
}
