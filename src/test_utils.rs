//! Shared test utilities for the canteen planner.
//!
//! This module provides common helper functions for setting up test databases
//! and building menus, dishes and suppliers with sensible defaults.

use crate::{
    core::{
        catalog,
        menu::{self, DishInput, IngredientLineInput, MenuDetail, MenuKey, MenuStatus, SaveMenuRequest},
    },
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The date every test menu is planned for unless a test overrides it.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Builds a dish with the given `(ingredient, quantity, unit)` lines.
///
/// # Defaults
/// * `planned_servings`: 50
/// * `chef_name`: "Chef Wang"
#[must_use]
pub fn dish_input(name: &str, lines: &[(&str, f64, &str)]) -> DishInput {
    DishInput {
        name: name.to_string(),
        planned_servings: Some(50),
        chef_name: Some("Chef Wang".to_string()),
        remark: None,
        ingredients: lines
            .iter()
            .map(|(ingredient, quantity, unit)| IngredientLineInput {
                ingredient_name: (*ingredient).to_string(),
                quantity: *quantity,
                unit: (*unit).to_string(),
                remark: None,
            })
            .collect(),
    }
}

/// Builds a save request for [`test_date`].
#[must_use]
pub fn menu_request(
    canteen_id: &str,
    meal_id: &str,
    status: MenuStatus,
    dishes: Vec<DishInput>,
) -> SaveMenuRequest {
    SaveMenuRequest {
        key: MenuKey {
            date: test_date(),
            canteen_id: canteen_id.to_string(),
            meal_id: meal_id.to_string(),
        },
        status,
        dishes,
    }
}

/// Saves a menu for [`test_date`].
pub async fn save_test_menu(
    db: &DatabaseConnection,
    canteen_id: &str,
    meal_id: &str,
    status: MenuStatus,
    dishes: Vec<DishInput>,
) -> Result<MenuDetail> {
    menu::save_menu(db, menu_request(canteen_id, meal_id, status, dishes)).await
}

/// Creates a supplier with no contact details.
pub async fn create_test_supplier(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::supplier::Model> {
    catalog::create_supplier(db, name, None, None).await
}
