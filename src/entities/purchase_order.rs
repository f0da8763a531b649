//! Purchase order entity - An order placed with a supplier for a target date.
//!
//! `date` is the day the order was raised, `target_date` the menu date it
//! procures for. `status` holds `"draft"` or `"confirmed"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the order was raised
    pub date: Date,
    /// Menu date the order procures for
    pub target_date: Date,
    /// Supplier the order is placed with
    pub supplier_id: i64,
    /// `"draft"` or `"confirmed"`
    pub status: String,
    /// Creation timestamp, used for newest-first listing
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `PurchaseOrder` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order is placed with one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    /// One order has many line items
    #[sea_orm(has_many = "super::purchase_order_item::Entity")]
    Items,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::purchase_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
