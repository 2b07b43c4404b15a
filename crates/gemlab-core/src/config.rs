//! Selector configuration.
//!
//! Every field has a default that reproduces the stock picker, so
//! `SelectorConfig::default()` needs no file at all.
//!
//! ```toml
//! locale = "en"
//! announce_recipe_name = true
//!
//! [[recipes]]
//! first = "C"
//! second = "Fe"
//! name = "Diamond"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;
use crate::recipe::{Material, Recipe, RecipeBook, builtin_materials};

/// Presentation and recipe settings for a [`Selector`](crate::Selector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Message language. Also picks the built-in recipe names.
    pub locale: Locale,
    /// Include the recipe name in the success message.
    pub announce_recipe_name: bool,
    /// Text shown in an empty slot.
    pub placeholder: String,
    /// Replaces the built-in recipe table when set.
    pub recipes: Option<Vec<Recipe>>,
    /// Replaces the built-in material reference table when set.
    pub materials: Option<Vec<Material>>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Ja,
            announce_recipe_name: false,
            placeholder: String::from("?"),
            recipes: None,
            materials: None,
        }
    }
}

impl SelectorConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        tracing::debug!(locale = ?config.locale, custom_recipes = config.recipes.is_some(), "loaded TOML selector config");
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        tracing::debug!(locale = ?config.locale, custom_recipes = config.recipes.is_some(), "loaded JSON selector config");
        Ok(config)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check the config for problems.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.placeholder.is_empty() {
            errors.push("placeholder must not be empty".into());
        }

        if let Some(recipes) = &self.recipes {
            if recipes.is_empty() {
                errors.push("recipes must not be empty".into());
            }
            let mut seen = HashSet::new();
            for (idx, r) in recipes.iter().enumerate() {
                if r.first.is_empty() || r.second.is_empty() || r.name.is_empty() {
                    errors.push(format!("recipes[{idx}] has an empty field"));
                }
                if !seen.insert((r.first.as_str(), r.second.as_str())) {
                    errors.push(format!(
                        "recipes[{idx}] repeats the pair ({}, {}) and can never match",
                        r.first, r.second
                    ));
                }
            }
        }

        if let Some(materials) = &self.materials {
            for (idx, m) in materials.iter().enumerate() {
                if m.symbol.is_empty() {
                    errors.push(format!("materials[{idx}] has an empty symbol"));
                }
            }
        }

        errors
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The configured recipe table, or the built-in one for the locale.
    #[must_use]
    pub fn recipe_book(&self) -> RecipeBook {
        match &self.recipes {
            Some(recipes) => RecipeBook::new(recipes.clone()),
            None => RecipeBook::builtin(self.locale),
        }
    }

    /// The configured material table, or the built-in one for the locale.
    #[must_use]
    pub fn material_table(&self) -> Vec<Material> {
        self.materials
            .clone()
            .unwrap_or_else(|| builtin_materials(self.locale))
    }
}

/// Errors from loading a [`SelectorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}
