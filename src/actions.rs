//! Procurement boundary - The operations UI and HTTP collaborators call.
//!
//! Every operation takes raw caller input (date strings, request bodies), validates
//! it, runs the core, and returns an [`ActionResult`]. Failures are logged here and
//! reported as a message; nothing below this layer is allowed to escape as a panic
//! or an unhandled error.

use crate::{
    core::{
        calendar::{self, DayStats},
        menu::{self, MenuDetail, MenuKey, SaveMenuRequest},
        parse_date,
        procurement::{self, AggregatedIngredient, OrderLineInput, PurchaseOrderDetail},
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{error, instrument, warn};

/// Outcome of a boundary operation.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionResult<T> {
    /// The operation succeeded
    Success {
        /// Always `true`
        success: bool,
        /// Operation output
        data: T,
    },
    /// The operation failed
    Failure {
        /// Always `false`
        success: bool,
        /// Human-readable failure message
        error: String,
    },
}

impl<T> ActionResult<T> {
    /// Wraps a successful value.
    pub fn ok(data: T) -> Self {
        Self::Success {
            success: true,
            data,
        }
    }

    /// Wraps a failure message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: error.into(),
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The data of a successful result.
    pub fn data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The message of a failed result.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}

fn finish<T>(operation: &str, subject: impl Display, result: Result<T>) -> ActionResult<T> {
    match result {
        Ok(data) => ActionResult::ok(data),
        Err(e) => {
            error!("[{operation}] failed for {subject}: {e}");
            ActionResult::failure(e.to_string())
        }
    }
}

fn warn_mixed_units(date: NaiveDate, aggregated: &[AggregatedIngredient]) {
    for record in aggregated.iter().filter(|r| r.has_mixed_units()) {
        let units: Vec<&str> = record
            .unit_breakdown
            .iter()
            .map(|s| s.unit.as_str())
            .collect();
        warn!(
            "{date}: ingredient {} ({}) summed across units {units:?}",
            record.ingredient_name, record.ingredient_id
        );
    }
}

/// Everything the procurement screen needs for one target date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementData {
    /// Demand from submitted menus, first-seen order
    pub aggregated_ingredients: Vec<AggregatedIngredient>,
    /// Orders for the date, newest first
    pub purchase_orders: Vec<PurchaseOrderDetail>,
    /// Ingredients already on an order, ascending
    pub assigned_ids: Vec<i64>,
    /// Aggregated ingredients not on any order yet
    pub pending: Vec<AggregatedIngredient>,
}

async fn load_procurement_data(db: &DatabaseConnection, date: NaiveDate) -> Result<ProcurementData> {
    let aggregated_ingredients = procurement::aggregate_ingredients_by_date(db, date).await?;
    warn_mixed_units(date, &aggregated_ingredients);
    let purchase_orders = procurement::get_purchase_orders_by_target_date(db, date).await?;
    let assigned = procurement::collect_assigned_ids(&purchase_orders);
    let pending = procurement::pending_pool(aggregated_ingredients.clone(), &assigned);
    Ok(ProcurementData {
        aggregated_ingredients,
        purchase_orders,
        assigned_ids: assigned.into_iter().collect(),
        pending,
    })
}

/// Ingredient demand for `date`.
#[instrument(skip(db))]
pub async fn aggregate(db: &DatabaseConnection, date: &str) -> ActionResult<Vec<AggregatedIngredient>> {
    let result = async {
        let date = parse_date(date)?;
        let aggregated = procurement::aggregate_ingredients_by_date(db, date).await?;
        warn_mixed_units(date, &aggregated);
        Ok::<_, Error>(aggregated)
    }
    .await;
    finish("aggregate", date, result)
}

/// Ingredient ids already on a purchase order for `date`, ascending.
#[instrument(skip(db))]
pub async fn assigned_ids(db: &DatabaseConnection, date: &str) -> ActionResult<Vec<i64>> {
    let result = async {
        let date = parse_date(date)?;
        let ids = procurement::get_assigned_ingredient_ids(db, date).await?;
        Ok::<Vec<i64>, Error>(ids.into_iter().collect())
    }
    .await;
    finish("assigned_ids", date, result)
}

/// Aggregated demand for `date` that no purchase order covers yet.
#[instrument(skip(db))]
pub async fn pending_pool(db: &DatabaseConnection, date: &str) -> ActionResult<Vec<AggregatedIngredient>> {
    let result = async {
        let date = parse_date(date)?;
        procurement::get_pending_pool(db, date).await
    }
    .await;
    finish("pending_pool", date, result)
}

/// Purchase orders for `date`, newest first.
#[instrument(skip(db))]
pub async fn purchase_orders(
    db: &DatabaseConnection,
    date: &str,
) -> ActionResult<Vec<PurchaseOrderDetail>> {
    let result = async {
        let date = parse_date(date)?;
        procurement::get_purchase_orders_by_target_date(db, date).await
    }
    .await;
    finish("purchase_orders", date, result)
}

/// Aggregate, orders, assigned ids and pending pool for `date` in one result.
#[instrument(skip(db))]
pub async fn procurement_data(db: &DatabaseConnection, date: &str) -> ActionResult<ProcurementData> {
    let result = async {
        let date = parse_date(date)?;
        load_procurement_data(db, date).await
    }
    .await;
    finish("procurement_data", date, result)
}

/// Creates a draft purchase order for `date`.
#[instrument(skip(db, lines), fields(lines = lines.len()))]
pub async fn create_purchase_order(
    db: &DatabaseConnection,
    date: &str,
    supplier_id: i64,
    lines: Vec<OrderLineInput>,
) -> ActionResult<PurchaseOrderDetail> {
    let result = async {
        let date = parse_date(date)?;
        procurement::create_purchase_order(db, date, supplier_id, lines).await
    }
    .await;
    finish("create_purchase_order", date, result)
}

/// Saves (creates or replaces) a menu.
#[instrument(skip(db, request), fields(date = %request.key.date, canteen = %request.key.canteen_id, meal = %request.key.meal_id))]
pub async fn save_menu(db: &DatabaseConnection, request: SaveMenuRequest) -> ActionResult<MenuDetail> {
    let subject = format!(
        "{} / {} / {}",
        request.key.date, request.key.canteen_id, request.key.meal_id
    );
    finish("save_menu", subject, menu::save_menu(db, request).await)
}

/// Deletes the menu stored under `(date, canteen_id, meal_id)`.
#[instrument(skip(db))]
pub async fn delete_menu(
    db: &DatabaseConnection,
    date: &str,
    canteen_id: &str,
    meal_id: &str,
) -> ActionResult<()> {
    let result = async {
        let key = MenuKey::new(parse_date(date)?, canteen_id, meal_id)?;
        menu::delete_menu(db, &key).await
    }
    .await;
    finish("delete_menu", date, result)
}

/// All menus for `date`, in creation order.
#[instrument(skip(db))]
pub async fn menus_by_date(db: &DatabaseConnection, date: &str) -> ActionResult<Vec<MenuDetail>> {
    let result = async {
        let date = parse_date(date)?;
        menu::get_menus_by_date(db, date).await
    }
    .await;
    finish("menus_by_date", date, result)
}

/// All menus with `start <= date <= end`, in date order.
#[instrument(skip(db))]
pub async fn menus_by_date_range(
    db: &DatabaseConnection,
    start: &str,
    end: &str,
) -> ActionResult<Vec<MenuDetail>> {
    let result = async {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        menu::get_menus_by_date_range(db, start, end).await
    }
    .await;
    finish("menus_by_date_range", format!("{start}..{end}"), result)
}

/// Per-day menu counts between `start` and `end`, keyed by `YYYY-MM-DD`.
#[instrument(skip(db))]
pub async fn menu_stats(
    db: &DatabaseConnection,
    start: &str,
    end: &str,
) -> ActionResult<BTreeMap<NaiveDate, DayStats>> {
    let result = async {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        calendar::get_menu_stats(db, start, end).await
    }
    .await;
    finish("menu_stats", format!("{start}..{end}"), result)
}
