//! Menu entity - The dishes planned for one canteen, meal slot and date.
//!
//! The `(date, canteen_id, meal_id)` triple is unique; the index is created
//! alongside the tables in [`crate::config::database::create_tables`].
//! `status` holds `"draft"` or `"submitted"` (see [`crate::core::menu::MenuStatus`]).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "menus")]
pub struct Model {
    /// Unique identifier for the menu
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the menu is served
    pub date: Date,
    /// Canteen identity (e.g., `"canteen-1"`)
    pub canteen_id: String,
    /// Meal slot identity (e.g., `"lunch"`)
    pub meal_id: String,
    /// `"draft"` or `"submitted"`
    pub status: String,
    /// When the menu was first saved
    pub created_at: DateTimeUtc,
    /// When the menu was last saved
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Menu and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One menu has many dishes
    #[sea_orm(has_many = "super::dish::Entity")]
    Dishes,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dishes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
