//! # Portion Scaling Module
//!
//! Recomputes every ingredient's quantity when the user changes the
//! target serving count, preserving ratios. The recipe detail view calls
//! this on every adjustment of the portion input, so the function is
//! pure and stateless: it never touches the caller's list and is safe to
//! call repeatedly with the live value.

use crate::catalog::UnitCatalog;
use crate::ingredient::Ingredient;
use crate::magnitude::normalize_magnitude;
use log::{debug, warn};

/// Portion count a recipe falls back to when it does not declare one.
pub const DEFAULT_PORTIONS: u32 = 2;

/// Rescale `ingredients` from `current_portions` to `target_portions`.
///
/// Each quantity is multiplied by `target / current`, except quantities
/// that are zero, negative or absent, which pass through unchanged.
/// Every scaled pair is then magnitude-normalized independently, so
/// doubling 600 g comes back as 1.2 kg.
///
/// The result is a new list with the same order and length; the input is
/// never mutated. Callers keep `target_portions` at 1 or above (the UI
/// clamps it); `current_portions` of zero is a contract violation and is
/// only guarded so the view degrades instead of crashing.
pub fn scale_portions(
    catalog: &UnitCatalog,
    ingredients: &[Ingredient],
    current_portions: u32,
    target_portions: u32,
) -> Vec<Ingredient> {
    if current_portions == 0 {
        warn!("scale_portions called with zero current portions, returning input unscaled");
        return ingredients.to_vec();
    }

    debug!(
        "Scaling {} ingredients from {} to {} portions",
        ingredients.len(),
        current_portions,
        target_portions
    );

    let ratio = f64::from(target_portions) / f64::from(current_portions);

    ingredients
        .iter()
        .map(|ingredient| {
            let scaled = match ingredient.quantity {
                Some(quantity) if quantity > 0.0 => Some(quantity * ratio),
                unscaled => unscaled,
            };
            match scaled {
                Some(quantity) => {
                    let measure = normalize_magnitude(catalog, quantity, &ingredient.unit);
                    Ingredient {
                        name: ingredient.name.clone(),
                        quantity: Some(measure.quantity),
                        unit: measure.unit,
                    }
                }
                None => ingredient.clone(),
            }
        })
        .collect()
}
