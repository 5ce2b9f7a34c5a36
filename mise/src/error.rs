//! Recipe-level errors

use mise_core::MiseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Recipe must serve at least one person")]
    NoServings,

    #[error("Cannot scale from {original} to {target} servings")]
    InvalidServings { original: u32, target: u32 },

    #[error("Ingredient {index} has no name")]
    UnnamedIngredient { index: usize },
}

impl From<RecipeError> for MiseError {
    fn from(err: RecipeError) -> Self {
        let message = err.to_string();
        match err {
            RecipeError::Json(_) => MiseError::parse_error(message)
                .with_suggestion("Recipes use camelCase keys: title, servings, prepTime, cookTime, ingredients"),
            RecipeError::NoServings => MiseError::invalid_recipe(message),
            RecipeError::InvalidServings { .. } => MiseError::invalid_recipe(message)
                .with_suggestion("Both serving counts must be at least 1"),
            RecipeError::UnnamedIngredient { index } => {
                MiseError::invalid_recipe(message).at_ingredient(index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mise_core::codes;

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MiseError = RecipeError::from(json_err).into();
        assert_eq!(err.code, codes::PARSE_ERROR);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_servings_errors() {
        let err: MiseError = RecipeError::InvalidServings { original: 4, target: 0 }.into();
        assert_eq!(err.code, codes::INVALID_RECIPE);
        assert!(err.message.contains("from 4 to 0"));
    }

    #[test]
    fn test_ingredient_index_kept() {
        let err: MiseError = RecipeError::UnnamedIngredient { index: 3 }.into();
        assert_eq!(err.context.and_then(|c| c.ingredient), Some(3));
    }
}
