//! Mise - recipe amounts for any table size
//!
//! Scales ingredient amounts by a serving multiplier and shows them in US
//! customary or metric units. The quantity engine lives in `mise-kitchen`;
//! this crate adds the recipe model, the per-ingredient pipeline and the
//! scaling plan, behind the [`Mise`] facade.

mod error;
mod recipe;
mod adjust;
mod plan;

pub use error::RecipeError;
pub use recipe::{Category, Difficulty, Ingredient, NutritionEstimate, Recipe, Step};
pub use adjust::{
    adjust_ingredient, adjust_recipe, AdjustedIngredient, AdjustedRecipe, Grouping,
    IngredientGroup, UNSECTIONED,
};
pub use plan::{plan_scaling, CookingTimes, ScaleDirection, ScalingPlan, TimeAdjustment};

pub use mise_core::{MiseError, UnitSystem, Value};
pub use mise_kitchen::{convert_amount, format_time, scale_amount, ServingMultiplier};
pub use mise_plugin::{EvalContext, PluginRegistry, Preferences};

use std::sync::Arc;

/// Main Mise engine
pub struct Mise {
    registry: Arc<PluginRegistry>,
    preferences: Preferences,
}

impl Mise {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            preferences: Preferences::default(),
        }
    }

    pub fn with_kitchen_library() -> Self {
        Self::new(mise_kitchen::load_kitchen_library(PluginRegistry::new()))
    }

    /// Kitchen library with preferences from `MISE_UNIT_SYSTEM` and
    /// `MISE_SERVING_MULTIPLIER`
    pub fn from_env() -> Self {
        Self::with_kitchen_library().with_preferences(Preferences::from_env())
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    fn context(&self) -> EvalContext {
        EvalContext::new(self.registry.clone()).with_preferences(self.preferences)
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        self.registry.call_function(name, args, &self.context())
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    pub fn adjust_recipe(&self, recipe: &Recipe) -> AdjustedRecipe {
        adjust::adjust_recipe(recipe, &self.preferences)
    }

    /// Decode, validate and adjust a JSON recipe
    pub fn adjust_recipe_json(&self, json: &str) -> Result<AdjustedRecipe, MiseError> {
        let recipe = Recipe::from_json(json)?;
        Ok(self.adjust_recipe(&recipe))
    }

    pub fn plan_scaling(&self, recipe: &Recipe, target_servings: u32) -> Result<ScalingPlan, MiseError> {
        let times = CookingTimes { prep: recipe.prep_time, cook: recipe.cook_time };
        Ok(plan::plan_scaling(recipe.servings, target_servings, Some(times))?)
    }
}

impl Default for Mise {
    fn default() -> Self {
        Self::with_kitchen_library()
    }
}

/// Build a plugin argument list: `args!["1 cup", "us", "metric"]`
#[macro_export]
macro_rules! args {
    [] => { Vec::<$crate::Value>::new() };
    [ $($value:expr),+ $(,)? ] => {
        vec![ $( $crate::Value::from($value) ),+ ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_mise() -> Mise {
        Mise::with_kitchen_library().with_preferences(Preferences {
            unit_system: UnitSystem::Metric,
            serving_multiplier: 2.0,
        })
    }

    #[test]
    fn test_call_convert() {
        let mise = Mise::default();
        let result = mise.call("convert_amount", &args!["1 cup", "us", "metric"]);
        assert_eq!(result.as_text(), Some("240 ml"));
    }

    #[test]
    fn test_call_uses_preferences() {
        let mise = metric_mise();
        let result = mise.call("adjust_amount", &args!["1 cup"]);
        assert_eq!(result.as_text(), Some("480 ml"));
    }

    #[test]
    fn test_unknown_function() {
        let mise = Mise::default();
        let result = mise.call("convert", &args![]);
        assert!(result.is_error());
    }

    #[test]
    fn test_help_and_listing() {
        let mise = Mise::default();
        let help = mise.help(Some("scale_amount"));
        assert!(help.as_object().is_some());
        assert_eq!(mise.list_functions(Some("kitchen")).as_list().map(|l| l.len()), Some(9));
    }

    #[test]
    fn test_adjust_recipe_json_errors() {
        let mise = Mise::default();
        let err = mise.adjust_recipe_json("not json").unwrap_err();
        assert_eq!(err.code, mise_core::codes::PARSE_ERROR);

        let err = mise
            .adjust_recipe_json(r#"{"title": "x", "servings": 0, "ingredients": []}"#)
            .unwrap_err();
        assert_eq!(err.code, mise_core::codes::INVALID_RECIPE);
    }

    #[test]
    fn test_plan_from_recipe() {
        let mise = Mise::default();
        let recipe = Recipe::from_json(
            r#"{"title": "Stew", "servings": 4, "prepTime": 20, "cookTime": 30, "ingredients": []}"#,
        ).unwrap();
        let plan = mise.plan_scaling(&recipe, 10).unwrap();
        assert_eq!(plan.times.unwrap().adjusted.cook, 35);
        assert!(mise.plan_scaling(&recipe, 0).is_err());
    }
}
