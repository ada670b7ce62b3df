//! # Shopping List Example
//!
//! This example walks the full quantity pipeline: a recipe is rescaled
//! to a different portion count, two recipes' ingredients are merged
//! into one shopping list, and the list is exported as the plain-text
//! payload the cart page encodes into a QR code. It also shows loading a
//! custom unit catalog from a JSON definition.

use recipe_units::{
    decline_unit, merge_ingredients, scale_portions, shopping_list_text, Ingredient, UnitCatalog,
    DEFAULT_PORTIONS,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🛒 Shopping List Example");
    println!("========================\n");

    let catalog = UnitCatalog::czech();

    // Example 1: portion scaling on the recipe detail view
    println!("📖 Example 1: Portion Scaling");
    println!("-----------------------------");

    let pancakes = vec![
        Ingredient::new("mouka", 200.0, "g"),
        Ingredient::new("mléko", 500.0, "ml"),
        Ingredient::new("vejce", 2.0, "ks"),
        Ingredient::unmeasured("sůl", "špetka"),
    ];

    let scaled = scale_portions(catalog, &pancakes, DEFAULT_PORTIONS, 6);
    println!("Palačinky for 6 portions instead of {}:", DEFAULT_PORTIONS);
    for ingredient in &scaled {
        println!("  • {}", ingredient);
    }

    // Example 2: merging two recipes into one shopping list
    println!("\n🧾 Example 2: Cart Merge");
    println!("------------------------");

    let cart = vec![
        // palačinky
        Ingredient::new("mouka", 600.0, "g"),
        Ingredient::new("mléko", 1500.0, "ml"),
        Ingredient::new("vejce", 6.0, "ks"),
        // bábovka
        Ingredient::new("mouka", 600.0, "g"),
        Ingredient::new("cukr", 150.0, "g"),
        Ingredient::new("vejce", 4.0, "ks"),
        Ingredient::unmeasured("sůl", "špetka"),
    ];

    let merged = merge_ingredients(catalog, &cart);
    println!("Merged {} cart entries into {} lines:", cart.len(), merged.len());
    for ingredient in &merged {
        println!("  • {}", ingredient);
    }

    // Example 3: QR payload with declined units and folded diacritics
    println!("\n🔳 Example 3: QR Payload");
    println!("------------------------");
    println!("{}", shopping_list_text(catalog, &merged));

    // Example 4: a custom catalog loaded from JSON
    println!("\n⚙️  Example 4: Custom Catalog");
    println!("----------------------------");

    let custom = UnitCatalog::from_json_str(
        r#"{
            "declensions": { "kus": { "one": "kus", "few": "kusy", "many": "kusů" } },
            "tiers": { "mg": { "larger_unit": "g", "scale": 1000.0 } }
        }"#,
    )?;

    for count in [1.0, 3.0, 5.0] {
        println!("{} {}", count, decline_unit(&custom, "kus", count));
    }

    Ok(())
}
