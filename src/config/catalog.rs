//! Catalog configuration loading from config.toml
//!
//! The catalog names the canteens and meal slots menus are planned for, and the
//! ingredients and suppliers that are seeded into the database on startup.
//! Canteens and meal slots fall back to a built-in list when the file omits them.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the catalog file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Canteens menus can be planned for
    #[serde(default = "default_canteens")]
    pub canteens: Vec<CanteenConfig>,
    /// Meal slots within a day
    #[serde(default = "default_meals")]
    pub meals: Vec<MealConfig>,
    /// Ingredients to seed
    #[serde(default)]
    pub ingredients: Vec<IngredientConfig>,
    /// Suppliers to seed
    #[serde(default)]
    pub suppliers: Vec<SupplierConfig>,
}

/// A canteen
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CanteenConfig {
    /// Stable identity stored on menus (e.g., `"canteen-1"`)
    pub id: String,
    /// Display name
    pub name: String,
}

/// A meal slot
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MealConfig {
    /// Stable identity stored on menus (e.g., `"lunch"`)
    pub id: String,
    /// Display name
    pub name: String,
}

/// An ingredient to seed
#[derive(Debug, Deserialize, Clone)]
pub struct IngredientConfig {
    /// Ingredient name
    pub name: String,
    /// Canonical unit
    pub unit: String,
}

/// A supplier to seed
#[derive(Debug, Deserialize, Clone)]
pub struct SupplierConfig {
    /// Supplier name
    pub name: String,
    /// Contact person
    #[serde(default)]
    pub contact: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
}

fn named(id: &str, name: &str) -> (String, String) {
    (id.to_string(), name.to_string())
}

fn default_canteens() -> Vec<CanteenConfig> {
    [
        named("canteen-1", "第一食堂"),
        named("canteen-2", "第二食堂"),
        named("canteen-3", "教工食堂"),
    ]
    .into_iter()
    .map(|(id, name)| CanteenConfig { id, name })
    .collect()
}

fn default_meals() -> Vec<MealConfig> {
    [
        named("breakfast", "早餐"),
        named("lunch", "午餐"),
        named("dinner", "晚餐"),
    ]
    .into_iter()
    .map(|(id, name)| MealConfig { id, name })
    .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            canteens: default_canteens(),
            meals: default_meals(),
            ingredients: Vec::new(),
            suppliers: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Display name of a canteen id, if it is configured.
    #[must_use]
    pub fn canteen_name(&self, canteen_id: &str) -> Option<&str> {
        self.canteens
            .iter()
            .find(|c| c.id == canteen_id)
            .map(|c| c.name.as_str())
    }

    /// Display name of a meal slot id, if it is configured.
    #[must_use]
    pub fn meal_name(&self, meal_id: &str) -> Option<&str> {
        self.meals
            .iter()
            .find(|m| m.id == meal_id)
            .map(|m| m.name.as_str())
    }
}

/// Parses a catalog from TOML text.
pub fn parse_config(contents: &str) -> Result<CatalogConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog config: {e}"),
    })
}

/// Loads the catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!(
            "Failed to read config file {}: {e}",
            path.as_ref().display()
        ),
    })?;

    parse_config(&contents)
}

/// Loads the catalog from `path` when it exists, otherwise returns the built-in default.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        Ok(CatalogConfig::default())
    }
}
