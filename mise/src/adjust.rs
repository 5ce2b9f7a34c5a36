//! Per-ingredient adjustment: scale every amount by the serving multiplier,
//! show it in the reader's unit system and group the results for display.

use mise_core::UnitSystem;
use mise_kitchen::{adjust_amount, adjusted_servings, ServingMultiplier};
use mise_plugin::Preferences;
use serde::Serialize;
use tracing::debug;

use crate::recipe::{Category, Ingredient, Recipe};

/// Group heading used for ingredients without a section
pub const UNSECTIONED: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedIngredient {
    pub item: String,
    pub amount: String,
    pub original_amount: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Position in the recipe's ingredient list
    pub original_index: usize,
}

impl AdjustedIngredient {
    pub fn is_changed(&self) -> bool {
        self.amount != self.original_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    Section,
    Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientGroup {
    pub key: String,
    pub label: String,
    pub items: Vec<AdjustedIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedRecipe {
    pub title: String,
    pub original_servings: u32,
    pub servings: u32,
    pub multiplier: f64,
    pub unit_system: UnitSystem,
    /// Recipe order
    pub ingredients: Vec<AdjustedIngredient>,
    pub grouping: Grouping,
    /// First-appearance order
    pub groups: Vec<IngredientGroup>,
}

impl AdjustedRecipe {
    pub fn group(&self, key: &str) -> Option<&IngredientGroup> {
        self.groups.iter().find(|g| g.key == key)
    }
}

/// Adjust one ingredient amount
pub fn adjust_ingredient(
    index: usize,
    ingredient: &Ingredient,
    multiplier: f64,
    system: UnitSystem,
) -> AdjustedIngredient {
    let amount = adjust_amount(&ingredient.amount, multiplier, system);
    if amount != ingredient.amount {
        debug!(index, item = %ingredient.item, from = %ingredient.amount, to = %amount, "adjusted amount");
    }

    AdjustedIngredient {
        item: ingredient.item.clone(),
        amount,
        original_amount: ingredient.amount.clone(),
        category: ingredient.category,
        section: ingredient.section.clone(),
        original_index: index,
    }
}

/// Adjust every ingredient of a recipe for the given preferences.
///
/// The multiplier is clamped to the range a [`ServingMultiplier`] allows.
/// Groups follow sections when any ingredient has one, categories otherwise.
pub fn adjust_recipe(recipe: &Recipe, preferences: &Preferences) -> AdjustedRecipe {
    let multiplier = ServingMultiplier::new(preferences.serving_multiplier).get();
    let system = preferences.unit_system;

    let ingredients: Vec<AdjustedIngredient> = recipe.ingredients.iter()
        .enumerate()
        .map(|(i, ing)| adjust_ingredient(i, ing, multiplier, system))
        .collect();

    let grouping = if recipe.has_sections() {
        Grouping::Section
    } else {
        Grouping::Category
    };
    let groups = group_ingredients(&ingredients, grouping);

    AdjustedRecipe {
        title: recipe.title.clone(),
        original_servings: recipe.servings,
        servings: adjusted_servings(recipe.servings, multiplier),
        multiplier,
        unit_system: system,
        ingredients,
        grouping,
        groups,
    }
}

fn group_ingredients(ingredients: &[AdjustedIngredient], grouping: Grouping) -> Vec<IngredientGroup> {
    let mut groups: Vec<IngredientGroup> = Vec::new();

    for ing in ingredients {
        let (key, label) = match grouping {
            Grouping::Section => {
                let name = ing.section.as_deref().unwrap_or(UNSECTIONED);
                (name.to_string(), name.to_string())
            }
            Grouping::Category => (ing.category.as_str().to_string(), ing.category.label().to_string()),
        };

        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.items.push(ing.clone()),
            None => groups.push(IngredientGroup { key, label, items: vec![ing.clone()] }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Difficulty;

    fn recipe(ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            title: "Test".to_string(),
            description: String::new(),
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients,
            steps: vec![],
            tips: vec![],
            nutrition_estimate: None,
        }
    }

    fn prefs(system: UnitSystem, multiplier: f64) -> Preferences {
        Preferences { unit_system: system, serving_multiplier: multiplier }
    }

    #[test]
    fn test_adjusts_every_ingredient() {
        let r = recipe(vec![
            Ingredient::new("flour", "2 cups", Category::Grain),
            Ingredient::new("eggs", "2", Category::Protein),
            Ingredient::new("salt", "to taste", Category::Spice),
        ]);
        let adjusted = adjust_recipe(&r, &prefs(UnitSystem::Metric, 1.5));

        assert_eq!(adjusted.servings, 6);
        assert_eq!(adjusted.ingredients[0].amount, "720 ml");
        assert_eq!(adjusted.ingredients[1].amount, "3");
        assert_eq!(adjusted.ingredients[2].amount, "to taste");
        assert!(!adjusted.ingredients[2].is_changed());
    }

    #[test]
    fn test_groups_by_category_in_first_appearance_order() {
        let r = recipe(vec![
            Ingredient::new("basil", "1 handful", Category::Vegetable),
            Ingredient::new("oil", "3 tbsp", Category::Other),
            Ingredient::new("garlic", "2", Category::Vegetable),
        ]);
        let adjusted = adjust_recipe(&r, &Preferences::default());

        assert_eq!(adjusted.grouping, Grouping::Category);
        let keys: Vec<&str> = adjusted.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["vegetable", "other"]);

        let veg = adjusted.group("vegetable").unwrap();
        assert_eq!(veg.label, "🥬 Vegetables");
        let indices: Vec<usize> = veg.items.iter().map(|i| i.original_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_groups_by_section_when_present() {
        let r = recipe(vec![
            Ingredient::new("flour", "2 cups", Category::Grain).in_section("Dough"),
            Ingredient::new("tomatoes", "400g", Category::Vegetable).in_section("Sauce"),
            Ingredient::new("basil", "1 handful", Category::Vegetable),
        ]);
        let adjusted = adjust_recipe(&r, &Preferences::default());

        assert_eq!(adjusted.grouping, Grouping::Section);
        let keys: Vec<&str> = adjusted.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Dough", "Sauce", UNSECTIONED]);
        assert_eq!(adjusted.group("Sauce").unwrap().items[0].amount, "14⅛ oz");
    }

    #[test]
    fn test_multiplier_is_clamped() {
        let r = recipe(vec![Ingredient::new("rice", "1 cup", Category::Grain)]);
        let adjusted = adjust_recipe(&r, &prefs(UnitSystem::Us, 50.0));
        assert_eq!(adjusted.multiplier, 10.0);
        assert_eq!(adjusted.servings, 40);
        assert_eq!(adjusted.ingredients[0].amount, "10 cup");
    }
}
