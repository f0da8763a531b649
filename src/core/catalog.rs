//! Catalog business logic - Ingredients and suppliers.
//!
//! Ingredients are reference data: the first dish that names an ingredient creates
//! it, later dishes find it by name. Suppliers are registered explicitly (or seeded
//! from configuration) and referenced by purchase orders.

use crate::{
    core::{normalize_optional, require_text},
    entities::{Ingredient, Supplier, ingredient, supplier},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Returns the ingredient called `name`, creating it with `unit` if it does not exist.
///
/// The name is trimmed before lookup. An existing ingredient is returned unchanged;
/// its canonical unit is not replaced by `unit`.
///
/// # Errors
/// Returns an error if the name or unit is blank, or if the store fails.
pub async fn get_or_create_ingredient<C>(db: &C, name: &str, unit: &str) -> Result<ingredient::Model>
where
    C: ConnectionTrait,
{
    let name = require_text(name, "Ingredient name")?;
    if let Some(existing) = Ingredient::find()
        .filter(ingredient::Column::Name.eq(name.as_str()))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    let unit = require_text(unit, "Ingredient unit")?;
    let model = ingredient::ActiveModel {
        name: Set(name),
        unit: Set(unit),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Finds an ingredient by its exact (trimmed) name.
pub async fn get_ingredient_by_name<C>(db: &C, name: &str) -> Result<Option<ingredient::Model>>
where
    C: ConnectionTrait,
{
    Ingredient::find()
        .filter(ingredient::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an ingredient by id.
pub async fn get_ingredient_by_id<C>(db: &C, ingredient_id: i64) -> Result<Option<ingredient::Model>>
where
    C: ConnectionTrait,
{
    Ingredient::find_by_id(ingredient_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all ingredients alphabetically.
pub async fn list_ingredients(db: &DatabaseConnection) -> Result<Vec<ingredient::Model>> {
    Ingredient::find()
        .order_by_asc(ingredient::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Registers a supplier.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
pub async fn create_supplier<C>(
    db: &C,
    name: &str,
    contact: Option<String>,
    phone: Option<String>,
) -> Result<supplier::Model>
where
    C: ConnectionTrait,
{
    let model = supplier::ActiveModel {
        name: Set(require_text(name, "Supplier name")?),
        contact: Set(normalize_optional(contact)),
        phone: Set(normalize_optional(phone)),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a supplier by id.
pub async fn get_supplier_by_id<C>(db: &C, supplier_id: i64) -> Result<Option<supplier::Model>>
where
    C: ConnectionTrait,
{
    Supplier::find_by_id(supplier_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a supplier by exact name.
pub async fn get_supplier_by_name<C>(db: &C, name: &str) -> Result<Option<supplier::Model>>
where
    C: ConnectionTrait,
{
    Supplier::find()
        .filter(supplier::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all suppliers alphabetically.
pub async fn list_suppliers(db: &DatabaseConnection) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .order_by_asc(supplier::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
