//! Unified error type for the canteen planner.
//!
//! Core functions return [`Result`] and propagate with `?`. The procurement
//! boundary ([`crate::actions`]) turns these into failure results carrying the
//! display message.

use thiserror::Error;

/// All failures the planner can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Any failure reported by the store (connectivity, constraint violation, ...)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Caller supplied input that fails validation
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// A date string that is not `YYYY-MM-DD`
    #[error("Invalid date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The offending input
        value: String,
    },

    /// A quantity that is negative, NaN or infinite
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The offending quantity
        quantity: f64,
    },

    /// No menu exists for the given key
    #[error("Menu not found: {date} / {canteen_id} / {meal_id}")]
    MenuNotFound {
        /// Menu date
        date: String,
        /// Canteen identity
        canteen_id: String,
        /// Meal slot identity
        meal_id: String,
    },

    /// A submitted menu cannot go back to draft
    #[error("Menu {menu_id} is already submitted")]
    MenuAlreadySubmitted {
        /// Id of the locked menu
        menu_id: i64,
    },

    /// Referenced ingredient does not exist
    #[error("Ingredient not found: {id}")]
    IngredientNotFound {
        /// Ingredient id or name
        id: String,
    },

    /// Referenced supplier does not exist
    #[error("Supplier not found: {id}")]
    SupplierNotFound {
        /// Supplier id
        id: i64,
    },

    /// Referenced purchase order does not exist
    #[error("Purchase order not found: {id}")]
    PurchaseOrderNotFound {
        /// Purchase order id
        id: i64,
    },

    /// A confirmed purchase order cannot be confirmed again
    #[error("Purchase order {id} is already confirmed")]
    OrderAlreadyConfirmed {
        /// Purchase order id
        id: i64,
    },

    /// JSON serialization failure (CLI output)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
