//! Dish entity - One dish on a menu.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dish database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "dishes")]
pub struct Model {
    /// Unique identifier for the dish
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning menu
    pub menu_id: i64,
    /// Dish name (e.g., "西红柿炒蛋")
    pub name: String,
    /// Number of servings planned, if known
    pub planned_servings: Option<i32>,
    /// Responsible preparer, if assigned
    pub chef_name: Option<String>,
    /// Free-form note
    pub remark: Option<String>,
}

/// Defines relationships between Dish and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each dish belongs to one menu
    #[sea_orm(
        belongs_to = "super::menu::Entity",
        from = "Column::MenuId",
        to = "super::menu::Column::Id",
        on_delete = "Cascade"
    )]
    Menu,
    /// One dish has many ingredient usage lines
    #[sea_orm(has_many = "super::dish_ingredient::Entity")]
    DishIngredients,
}

impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menu.def()
    }
}

impl Related<super::dish_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
