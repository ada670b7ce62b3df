//! # Integration Tests
//!
//! End-to-end flows through the public API: a persisted cart is
//! deserialized, recipes are rescaled, everything is merged and the
//! result is exported as the QR payload, the exact path the recipe
//! detail and cart views take.

use recipe_units::{
    merge_ingredients, scale_portions, shopping_list_lines, shopping_list_text, Ingredient,
    UnitCatalog, DEFAULT_PORTIONS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_json_to_qr_payload() {
        let catalog = UnitCatalog::czech();

        // Cart persisted by the web app; quantity may be null.
        let stored = r#"[
            {"name":"mouka","quantity":600,"unit":"g"},
            {"name":"mouka","quantity":600,"unit":"g"},
            {"name":"mléko","quantity":1500,"unit":"ml"},
            {"name":"sůl","quantity":null,"unit":"špetka"},
            {"name":"česnek","quantity":3,"unit":"stroužek"}
        ]"#;
        let cart: Vec<Ingredient> = serde_json::from_str(stored).expect("valid cart JSON");

        let merged = merge_ingredients(catalog, &cart);
        assert_eq!(
            merged,
            vec![
                Ingredient::new("mouka", 1.2, "kg"),
                Ingredient::new("mléko", 1.5, "l"),
                Ingredient::new("česnek", 3.0, "stroužek"),
            ]
        );

        assert_eq!(
            shopping_list_text(catalog, &merged),
            "mouka 1.2 kg\nmleko 1.5 l\ncesnek 3 strouzky"
        );
    }

    #[test]
    fn test_scale_then_merge_two_recipes() {
        let catalog = UnitCatalog::czech();

        let pancakes = vec![
            Ingredient::new("mouka", 200.0, "g"),
            Ingredient::new("mléko", 500.0, "ml"),
            Ingredient::new("vejce", 2.0, "ks"),
        ];
        let cake = vec![
            Ingredient::new("mouka", 300.0, "g"),
            Ingredient::new("cukr", 150.0, "g"),
            Ingredient::new("vejce", 4.0, "ks"),
        ];

        // Both recipes rescaled from the default two portions to six.
        // Scaling already normalizes, so the milk arrives as 1.5 l.
        let mut cart = scale_portions(catalog, &pancakes, DEFAULT_PORTIONS, 6);
        cart.extend(scale_portions(catalog, &cake, DEFAULT_PORTIONS, 6));

        let merged = merge_ingredients(catalog, &cart);

        assert_eq!(
            merged,
            vec![
                // 600 g + 900 g, summed before the tier rewrite
                Ingredient::new("mouka", 1.5, "kg"),
                Ingredient::new("mléko", 1.5, "l"),
                Ingredient::new("vejce", 18.0, "ks"),
                Ingredient::new("cukr", 450.0, "g"),
            ]
        );
    }

    #[test]
    fn test_declined_lines_follow_merged_quantities() {
        let catalog = UnitCatalog::czech();

        let cart = vec![
            Ingredient::new("česnek", 2.0, "stroužek"),
            Ingredient::new("česnek", 3.0, "stroužek"),
            Ingredient::new("bobkový list", 2.0, "lístek"),
        ];

        let lines = shopping_list_lines(catalog, &merge_ingredients(catalog, &cart));

        // 2 + 3 cloves crosses from "few" to "many".
        assert_eq!(lines[0], "cesnek 5 strouzku");
        assert_eq!(lines[1], "bobkovy list 2 listky");
    }

    #[test]
    fn test_merge_output_is_stable_under_repetition() {
        let catalog = UnitCatalog::czech();
        let cart = vec![
            Ingredient::new("mouka", 900.0, "g"),
            Ingredient::new("mouka", 900.0, "g"),
            Ingredient::new("cukr", 100.0, "g"),
        ];

        let once = merge_ingredients(catalog, &cart);
        let twice = merge_ingredients(catalog, &once);
        let thrice = merge_ingredients(catalog, &twice);

        assert_eq!(once, vec![
            Ingredient::new("mouka", 1.8, "kg"),
            Ingredient::new("cukr", 100.0, "g"),
        ]);
        assert_eq!(once, twice);
        assert_eq!(twice, thrice);
    }
}
