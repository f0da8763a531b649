//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod dish;
pub mod dish_ingredient;
pub mod ingredient;
pub mod menu;
pub mod purchase_order;
pub mod purchase_order_item;
pub mod supplier;

// Re-export specific types to avoid conflicts
pub use dish::{Column as DishColumn, Entity as Dish, Model as DishModel};
pub use dish_ingredient::{
    Column as DishIngredientColumn, Entity as DishIngredient, Model as DishIngredientModel,
};
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use menu::{Column as MenuColumn, Entity as Menu, Model as MenuModel};
pub use purchase_order::{
    Column as PurchaseOrderColumn, Entity as PurchaseOrder, Model as PurchaseOrderModel,
};
pub use purchase_order_item::{
    Column as PurchaseOrderItemColumn, Entity as PurchaseOrderItem,
    Model as PurchaseOrderItemModel,
};
pub use supplier::{Column as SupplierColumn, Entity as Supplier, Model as SupplierModel};
