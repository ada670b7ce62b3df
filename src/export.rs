//! # Shopping List Export Module
//!
//! Formats a merged shopping list as plain text for printing and for the
//! QR code on the cart page. The payload is plain ASCII: diacritics are
//! folded away, so "lžíce" becomes "lzice".

use crate::catalog::UnitCatalog;
use crate::declension::decline_unit;
use crate::ingredient::Ingredient;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics via NFD decomposition: "špetka" → "spetka".
pub fn remove_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Format each ingredient as a `"name quantity unit"` line with the unit
/// declined for its quantity and diacritics removed.
///
/// Ingredients without a quantity render as name and unit only, the unit
/// in its base form.
pub fn shopping_list_lines(catalog: &UnitCatalog, ingredients: &[Ingredient]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| match ingredient.quantity {
            Some(quantity) => format!(
                "{} {} {}",
                remove_diacritics(&ingredient.name),
                quantity,
                remove_diacritics(decline_unit(catalog, &ingredient.unit, quantity))
            ),
            None => format!(
                "{} {}",
                remove_diacritics(&ingredient.name),
                remove_diacritics(decline_unit(catalog, &ingredient.unit, 1.0))
            ),
        })
        .collect()
}

/// The full shopping list as one newline-joined string, the QR payload.
pub fn shopping_list_text(catalog: &UnitCatalog, ingredients: &[Ingredient]) -> String {
    shopping_list_lines(catalog, ingredients).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics() {
        assert_eq!(remove_diacritics("lžíce"), "lzice");
        assert_eq!(remove_diacritics("špetka"), "spetka");
        assert_eq!(remove_diacritics("sůl"), "sul");
        assert_eq!(remove_diacritics("mouka"), "mouka");
    }

    #[test]
    fn test_line_formatting() {
        let catalog = UnitCatalog::czech();
        let list = vec![
            Ingredient::new("mouka", 1.2, "kg"),
            Ingredient::new("česnek", 3.0, "stroužek"),
            Ingredient::unmeasured("sůl", "špetka"),
        ];

        let lines = shopping_list_lines(catalog, &list);

        assert_eq!(lines[0], "mouka 1.2 kg");
        assert_eq!(lines[1], "cesnek 3 strouzky");
        assert_eq!(lines[2], "sul spetka");
    }

    #[test]
    fn test_integral_quantities_render_without_decimals() {
        let catalog = UnitCatalog::czech();
        let list = vec![Ingredient::new("cukr", 400.0, "g")];
        assert_eq!(shopping_list_lines(catalog, &list)[0], "cukr 400 g");
    }

    #[test]
    fn test_qr_payload_joins_lines() {
        let catalog = UnitCatalog::czech();
        let list = vec![
            Ingredient::new("cukr", 400.0, "g"),
            Ingredient::new("mléko", 1.5, "l"),
        ];
        assert_eq!(
            shopping_list_text(catalog, &list),
            "cukr 400 g\nmleko 1.5 l"
        );
    }
}
