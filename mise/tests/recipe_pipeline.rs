use mise::{args, Category, Grouping, Mise, Preferences, Recipe, ScaleDirection, UnitSystem};

const MARGHERITA: &str = r#"{
    "title": "Classic Margherita Pizza",
    "description": "A crispy thin crust, tangy tomato sauce, creamy mozzarella and fresh basil.",
    "prepTime": 20,
    "cookTime": 15,
    "servings": 4,
    "difficulty": "medium",
    "ingredients": [
        { "item": "pizza dough", "amount": "500g", "category": "grain" },
        { "item": "crushed tomatoes", "amount": "400g", "category": "vegetable" },
        { "item": "fresh mozzarella cheese", "amount": "250g", "category": "dairy" },
        { "item": "fresh basil leaves", "amount": "1 handful", "category": "vegetable" },
        { "item": "extra virgin olive oil", "amount": "3 tbsp", "category": "other" },
        { "item": "garlic cloves, minced", "amount": "2", "category": "vegetable" },
        { "item": "salt", "amount": "to taste", "category": "spice" },
        { "item": "dried oregano", "amount": "1 tsp", "category": "spice" }
    ],
    "steps": [
        { "stepNumber": 1, "instruction": "Preheat the oven to 250°C.", "duration": 5 },
        { "stepNumber": 2, "instruction": "Make the sauce.", "duration": 5 }
    ]
}"#;

const LASAGNA: &str = r#"{
    "title": "Lasagna",
    "prepTime": 45,
    "cookTime": 60,
    "servings": 6,
    "difficulty": "hard",
    "ingredients": [
        { "item": "ground beef", "amount": "1 lb", "category": "protein", "section": "Meat sauce" },
        { "item": "tomato passata", "amount": "3 cups", "category": "vegetable", "section": "Meat sauce" },
        { "item": "butter", "amount": "4 tbsp", "category": "dairy", "section": "Béchamel" },
        { "item": "milk", "amount": "2 1/2 cups", "category": "dairy", "section": "Béchamel" },
        { "item": "lasagna sheets", "amount": "12", "category": "grain" },
        { "item": "oven", "amount": "375°F", "category": "other" }
    ]
}"#;

fn mise(system: UnitSystem, multiplier: f64) -> Mise {
    Mise::with_kitchen_library().with_preferences(Preferences {
        unit_system: system,
        serving_multiplier: multiplier,
    })
}

fn amounts(mise: &Mise, json: &str) -> Vec<String> {
    let adjusted = mise.adjust_recipe_json(json).unwrap();
    adjusted.ingredients.into_iter().map(|i| i.amount).collect()
}

#[test]
fn metric_recipe_shown_in_us_units() {
    let got = amounts(&mise(UnitSystem::Us, 1.0), MARGHERITA);
    assert_eq!(
        got,
        vec!["1.1 lbs", "14⅛ oz", "8.8 oz", "1 handful", "3 tbsp", "2", "to taste", "1 tsp"]
    );
}

#[test]
fn doubled_recipe_in_metric() {
    let m = mise(UnitSystem::Metric, 2.0);
    let adjusted = m.adjust_recipe_json(MARGHERITA).unwrap();

    assert_eq!(adjusted.servings, 8);
    assert_eq!(adjusted.original_servings, 4);
    let got: Vec<&str> = adjusted.ingredients.iter().map(|i| i.amount.as_str()).collect();
    assert_eq!(
        got,
        vec!["1000 g", "800 g", "500 g", "2 handful", "88.7 ml", "4", "to taste", "9⅞ ml"]
    );
}

#[test]
fn category_groups_keep_first_appearance_order() {
    let adjusted = mise(UnitSystem::Us, 1.0).adjust_recipe_json(MARGHERITA).unwrap();
    assert_eq!(adjusted.grouping, Grouping::Category);

    let keys: Vec<&str> = adjusted.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["grain", "vegetable", "dairy", "other", "spice"]);

    let veg = adjusted.group("vegetable").unwrap();
    let indices: Vec<usize> = veg.items.iter().map(|i| i.original_index).collect();
    assert_eq!(indices, vec![1, 3, 5]);
    assert!(veg.items.iter().all(|i| i.category == Category::Vegetable));
}

#[test]
fn sectioned_recipe_groups_by_section() {
    let adjusted = mise(UnitSystem::Metric, 1.0).adjust_recipe_json(LASAGNA).unwrap();
    assert_eq!(adjusted.grouping, Grouping::Section);

    let keys: Vec<&str> = adjusted.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Meat sauce", "Béchamel", "Other"]);

    let got: Vec<&str> = adjusted.ingredients.iter().map(|i| i.amount.as_str()).collect();
    assert_eq!(got, vec!["453.6 g", "720 ml", "59.1 ml", "600 ml", "12", "191°C"]);
}

#[test]
fn adjusted_recipe_serializes_camel_case() {
    let adjusted = mise(UnitSystem::Metric, 1.5).adjust_recipe_json(LASAGNA).unwrap();
    let json = serde_json::to_value(&adjusted).unwrap();
    assert_eq!(json["servings"], 9);
    assert_eq!(json["unitSystem"], "metric");
    assert_eq!(json["ingredients"][0]["originalAmount"], "1 lb");
    assert_eq!(json["ingredients"][0]["originalIndex"], 0);
    assert_eq!(json["grouping"], "section");
}

#[test]
fn scaling_plan_for_a_party() {
    let recipe = Recipe::from_json(LASAGNA).unwrap();
    let plan = Mise::default().plan_scaling(&recipe, 15).unwrap();

    assert_eq!(plan.factor, 2.5);
    assert_eq!(plan.direction, ScaleDirection::Up);
    assert!(plan.batch_cooking_recommended());

    let summary = plan.summary(&recipe.title);
    assert!(summary.contains("Scale factor: 2.50x"));
    assert!(summary.contains("- Prep: 50 min (+5 min)"));
    assert!(summary.contains("- Cook: 1 hour 9 min (+9 min)"));
}

#[test]
fn plugin_surface_matches_direct_calls() {
    let m = mise(UnitSystem::Metric, 2.0);
    assert_eq!(m.call("scale_number", &args!["1 1/2", 2.0]).as_number(), Some(3.0));
    assert!(m.call("scale_number", &args!["abc", 2.0]).is_null());
    assert_eq!(m.call("format_scaled_number", &args![0.75]).as_text(), Some("¾"));
    assert_eq!(m.call("contains_metric_units", &args!["250 ml"]).as_bool(), Some(true));
    assert_eq!(m.call("format_time", &args![90.0]).as_text(), Some("1 hour 30 min"));
    assert_eq!(m.call("adjusted_servings", &args![4.0]).as_number(), Some(8.0));
    assert_eq!(
        m.call("convert_amount", &args!["500 ml", "metric", "us"]).as_text(),
        Some("2.1 cups")
    );
}

#[test]
fn invalid_unit_system_is_reported() {
    let result = Mise::default().call("convert_amount", &args!["1 cup", "us", "imperial"]);
    match result {
        mise::Value::Error(e) => assert_eq!(e.code, "INVALID_UNIT_SYSTEM"),
        other => panic!("Expected Error, got {:?}", other),
    }
}
