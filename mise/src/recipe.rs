//! Recipe data model
//!
//! Mirrors the JSON recipes are exchanged in: camelCase keys, amounts kept as
//! the free-form strings they were written as.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RecipeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Shopping category of an ingredient. Unknown names read as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Vegetable,
    Grain,
    Dairy,
    Spice,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Vegetable => "vegetable",
            Category::Grain => "grain",
            Category::Dairy => "dairy",
            Category::Spice => "spice",
            Category::Other => "other",
        }
    }

    /// Heading shown above a category group
    pub fn label(&self) -> &'static str {
        match self {
            Category::Protein => "🥩 Protein",
            Category::Vegetable => "🥬 Vegetables",
            Category::Grain => "🌾 Grains & Pasta",
            Category::Dairy => "🧈 Dairy",
            Category::Spice => "🧂 Spices & Seasonings",
            Category::Other => "📦 Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub item: String,
    /// As written: "1 1/2 cups", "500g", "to taste"
    pub amount: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: impl Into<String>, category: Category) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
            category,
            section: None,
        }
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_number: u32,
    pub instruction: String,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    pub calories: f64,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Minutes
    #[serde(default)]
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_estimate: Option<NutritionEstimate>,
}

impl Recipe {
    /// Decode and validate a recipe
    pub fn from_json(json: &str) -> Result<Recipe, RecipeError> {
        let recipe: Recipe = serde_json::from_str(json)?;
        recipe.validate()?;
        Ok(recipe)
    }

    pub fn to_json(&self) -> Result<String, RecipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.servings == 0 {
            return Err(RecipeError::NoServings);
        }
        if let Some(index) = self.ingredients.iter().position(|i| i.item.trim().is_empty()) {
            return Err(RecipeError::UnnamedIngredient { index });
        }
        Ok(())
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    /// True when any ingredient names a section ("For the sauce", ...)
    pub fn has_sections(&self) -> bool {
        self.ingredients.iter().any(|i| i.section.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIZZA: &str = r#"{
        "title": "Classic Margherita Pizza",
        "description": "Thin crust, tomato, mozzarella, basil.",
        "prepTime": 20,
        "cookTime": 15,
        "servings": 4,
        "difficulty": "medium",
        "ingredients": [
            { "item": "pizza dough", "amount": "500g", "category": "grain" },
            { "item": "extra virgin olive oil", "amount": "3 tbsp", "category": "other" },
            { "item": "salt", "amount": "to taste", "category": "spice" }
        ],
        "steps": [
            { "stepNumber": 1, "instruction": "Preheat the oven.", "duration": 5 }
        ],
        "tips": ["Use a pizza stone"]
    }"#;

    #[test]
    fn test_decode_recipe() {
        let recipe = Recipe::from_json(PIZZA).unwrap();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[0].category, Category::Grain);
        assert_eq!(recipe.steps[0].duration, Some(5));
        assert_eq!(recipe.total_time(), 35);
        assert!(!recipe.has_sections());
    }

    #[test]
    fn test_unknown_category_is_other() {
        let ing: Ingredient = serde_json::from_str(
            r#"{"item": "sugar", "amount": "1 cup", "category": "baking"}"#,
        ).unwrap();
        assert_eq!(ing.category, Category::Other);

        let ing: Ingredient = serde_json::from_str(r#"{"item": "sugar", "amount": "1 cup"}"#).unwrap();
        assert_eq!(ing.category, Category::Other);
    }

    #[test]
    fn test_validation() {
        let mut recipe = Recipe::from_json(PIZZA).unwrap();
        recipe.servings = 0;
        assert!(matches!(recipe.validate(), Err(RecipeError::NoServings)));

        recipe.servings = 2;
        recipe.ingredients[1].item = "  ".to_string();
        assert!(matches!(recipe.validate(), Err(RecipeError::UnnamedIngredient { index: 1 })));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Recipe::from_json("{\"title\": 3}"), Err(RecipeError::Json(_))));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let recipe = Recipe::from_json(PIZZA).unwrap();
        let json = recipe.to_json().unwrap();
        assert!(json.contains("\"prepTime\": 20"));
        assert!(json.contains("\"stepNumber\": 1"));
        assert!(!json.contains("nutritionEstimate"));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Spice.label(), "🧂 Spices & Seasonings");
        assert_eq!(Category::Other.to_string(), "other");
    }
}
