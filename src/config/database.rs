//! Database configuration module for the canteen planner.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. The composite unique key on menus
//! cannot be expressed on a single column and is added as a separate index.

use crate::entities::{
    Dish, DishIngredient, Ingredient, Menu, PurchaseOrder, PurchaseOrderItem, Supplier, menu,
};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/canteen_planner.sqlite?mode=rwc";

/// Name of the unique index over `(date, canteen_id, meal_id)`.
pub const MENU_KEY_INDEX: &str = "idx_menus_date_canteen_meal";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    connect(&get_database_url()).await
}

/// Connects to an explicit database URL.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<()> {
    let builder = db.get_database_backend();
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    Ok(())
}

/// Creates all tables (parents before children) and the menu key index.
///
/// Safe to run against an existing database: every statement is `IF NOT EXISTS`.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    create_table(db, &schema, Ingredient).await?;
    create_table(db, &schema, Supplier).await?;
    create_table(db, &schema, Menu).await?;
    create_table(db, &schema, Dish).await?;
    create_table(db, &schema, DishIngredient).await?;
    create_table(db, &schema, PurchaseOrder).await?;
    create_table(db, &schema, PurchaseOrderItem).await?;

    let menu_key = Index::create()
        .name(MENU_KEY_INDEX)
        .table(Menu)
        .col(menu::Column::Date)
        .col(menu::Column::CanteenId)
        .col(menu::Column::MealId)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&menu_key)).await?;

    Ok(())
}
