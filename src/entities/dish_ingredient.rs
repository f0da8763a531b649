//! Dish ingredient entity - One ingredient usage line of a dish.
//!
//! `unit` is copied verbatim from the editor and may differ from the
//! ingredient's canonical unit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient usage line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "dish_ingredients")]
pub struct Model {
    /// Unique identifier for the line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Dish this line belongs to
    pub dish_id: i64,
    /// Ingredient consumed
    pub ingredient_id: i64,
    /// Quantity required (non-negative)
    pub quantity: f64,
    /// Unit the quantity is expressed in
    pub unit: String,
    /// Optional note (e.g., "切丝")
    pub remark: Option<String>,
}

/// Defines relationships between usage lines and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one dish
    #[sea_orm(
        belongs_to = "super::dish::Entity",
        from = "Column::DishId",
        to = "super::dish::Column::Id",
        on_delete = "Cascade"
    )]
    Dish,
    /// Each line references one ingredient
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id"
    )]
    Ingredient,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
