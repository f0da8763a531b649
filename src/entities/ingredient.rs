//! Ingredient entity - Reference data for everything a dish can consume.
//!
//! Ingredients are created the first time a dish names them and are looked up
//! by name afterwards. The `unit` is the canonical unit recorded at creation;
//! usage lines carry their own unit and are not checked against it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "土豆"), unique across the catalog
    #[sea_orm(unique)]
    pub name: String,
    /// Canonical unit of measure (e.g., "kg", "个")
    pub unit: String,
    /// When the ingredient was first recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Ingredient and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One ingredient is used by many dish lines
    #[sea_orm(has_many = "super::dish_ingredient::Entity")]
    DishIngredients,
    /// One ingredient appears on many purchase order lines
    #[sea_orm(has_many = "super::purchase_order_item::Entity")]
    PurchaseOrderItems,
}

impl Related<super::dish_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl Related<super::purchase_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
