//! Procurement business logic - Turning submitted menus into purchase orders.
//!
//! Three steps feed the procurement screen for a target date:
//!
//! 1. [`aggregate_ingredients_by_date`] sums every ingredient line of every
//!    submitted menu, grouped by ingredient, remembering which dishes asked for it.
//! 2. [`get_assigned_ingredient_ids`] collects the ingredients that already appear
//!    on any purchase order for the date, whatever the order's status.
//! 3. [`pending_pool`] keeps the aggregated ingredients that are not assigned yet.
//!
//! Assignment is all-or-nothing: an ingredient on any order line is assigned even
//! if the ordered quantity is smaller than the aggregated demand. Units are opaque
//! labels; quantities in different units are still summed into `total_quantity`,
//! and `unit_breakdown` keeps the per-unit subtotals.

use crate::{
    core::{catalog, menu, normalize_optional, require_text, validate_quantity},
    entities::{
        Ingredient, PurchaseOrder, PurchaseOrderItem, Supplier, ingredient, purchase_order,
        purchase_order_item, supplier,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// One dish that contributed to an aggregated ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSource {
    /// Name of the dish
    pub dish_name: String,
    /// Menu the dish belongs to
    pub menu_id: i64,
    /// Quantity this dish asked for
    pub quantity: f64,
}

/// Subtotal of an aggregated ingredient in one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSubtotal {
    /// Unit label, as written on the usage lines
    pub unit: String,
    /// Sum of the quantities written in this unit
    pub quantity: f64,
}

/// Total demand for one ingredient on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    /// Ingredient identity
    pub ingredient_id: i64,
    /// Ingredient display name
    pub ingredient_name: String,
    /// Sum of all line quantities, regardless of unit
    pub total_quantity: f64,
    /// Unit of the first line seen for this ingredient
    pub unit: String,
    /// Per-unit subtotals in first-seen order; more than one entry means mixed units
    pub unit_breakdown: Vec<UnitSubtotal>,
    /// Contributing dishes, one entry per usage line
    pub sources: Vec<IngredientSource>,
}

impl AggregatedIngredient {
    /// Whether lines with different units were summed into `total_quantity`.
    #[must_use]
    pub fn has_mixed_units(&self) -> bool {
        self.unit_breakdown.len() > 1
    }
}

/// Sums ingredient demand over already loaded menus.
///
/// Only submitted menus are counted. Records come back in the order their
/// ingredient was first encountered (menu, then dish, then line order).
#[must_use]
pub fn aggregate_ingredients(menus: &[menu::MenuDetail]) -> Vec<AggregatedIngredient> {
    let mut aggregated: Vec<AggregatedIngredient> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    let submitted = menus
        .iter()
        .filter(|m| m.status() == menu::MenuStatus::Submitted);

    for detail in submitted {
        for dish in &detail.dishes {
            for line in &dish.ingredients {
                let usage = &line.usage;
                let position = *positions.entry(usage.ingredient_id).or_insert_with(|| {
                    aggregated.push(AggregatedIngredient {
                        ingredient_id: usage.ingredient_id,
                        ingredient_name: line.ingredient.name.clone(),
                        total_quantity: 0.0,
                        unit: usage.unit.clone(),
                        unit_breakdown: Vec::new(),
                        sources: Vec::new(),
                    });
                    aggregated.len() - 1
                });

                let record = &mut aggregated[position];
                record.total_quantity += usage.quantity;
                match record
                    .unit_breakdown
                    .iter_mut()
                    .find(|s| s.unit == usage.unit)
                {
                    Some(subtotal) => subtotal.quantity += usage.quantity,
                    None => record.unit_breakdown.push(UnitSubtotal {
                        unit: usage.unit.clone(),
                        quantity: usage.quantity,
                    }),
                }
                record.sources.push(IngredientSource {
                    dish_name: dish.dish.name.clone(),
                    menu_id: detail.menu.id,
                    quantity: usage.quantity,
                });
            }
        }
    }

    aggregated
}

/// Aggregates ingredient demand over the submitted menus of `date`.
///
/// # Errors
/// Propagates any store failure.
pub async fn aggregate_ingredients_by_date<C>(
    db: &C,
    date: NaiveDate,
) -> Result<Vec<AggregatedIngredient>>
where
    C: ConnectionTrait,
{
    let menus = menu::get_submitted_menus(db, date).await?;
    Ok(aggregate_ingredients(&menus))
}

/// Keeps the aggregated ingredients that no purchase order covers yet, in order.
#[must_use]
pub fn pending_pool(
    aggregated: Vec<AggregatedIngredient>,
    assigned: &BTreeSet<i64>,
) -> Vec<AggregatedIngredient> {
    aggregated
        .into_iter()
        .filter(|record| !assigned.contains(&record.ingredient_id))
        .collect()
}

/// Aggregated ingredients for `date` minus the ones already assigned to an order.
pub async fn get_pending_pool<C>(db: &C, date: NaiveDate) -> Result<Vec<AggregatedIngredient>>
where
    C: ConnectionTrait,
{
    let aggregated = aggregate_ingredients_by_date(db, date).await?;
    let assigned = get_assigned_ingredient_ids(db, date).await?;
    Ok(pending_pool(aggregated, &assigned))
}

/// Lifecycle state of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created, not yet confirmed with the supplier
    Draft,
    /// Confirmed with the supplier
    Confirmed,
}

impl OrderStatus {
    /// The persisted form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "confirmed" => Ok(Self::Confirmed),
            other => Err(Error::validation(format!("unknown order status {other:?}"))),
        }
    }
}

/// One line of a purchase order to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    /// Ingredient to order
    pub ingredient_id: i64,
    /// Quantity to order; not checked against the aggregated demand
    pub quantity: f64,
    /// Unit of the quantity
    pub unit: String,
    /// Optional note for the supplier
    #[serde(default)]
    pub remark: Option<String>,
}

/// An order line together with its ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// The stored line
    #[serde(flatten)]
    pub item: purchase_order_item::Model,
    /// The ordered ingredient
    pub ingredient: ingredient::Model,
}

/// A purchase order with its supplier and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDetail {
    /// The stored order
    #[serde(flatten)]
    pub order: purchase_order::Model,
    /// The supplier, if it still exists
    pub supplier: Option<supplier::Model>,
    /// Order lines, in id order
    pub items: Vec<OrderLine>,
}

impl PurchaseOrderDetail {
    /// Parsed status of the order. Unknown stored values read as draft.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.order.status.parse().unwrap_or(OrderStatus::Draft)
    }
}

/// Creates a draft purchase order for `target_date`, dated today (UTC).
///
/// The supplier and every ingredient must exist, the line list must not be empty,
/// and each quantity must be finite and non-negative. Quantities are not compared
/// with the aggregated demand; callers may order more or less than needed.
/// The order and its lines are written in one transaction.
pub async fn create_purchase_order(
    db: &DatabaseConnection,
    target_date: NaiveDate,
    supplier_id: i64,
    lines: Vec<OrderLineInput>,
) -> Result<PurchaseOrderDetail> {
    if lines.is_empty() {
        return Err(Error::validation("a purchase order needs at least one line"));
    }
    for line in &lines {
        validate_quantity(line.quantity)?;
        require_text(&line.unit, "Unit")?;
    }

    let txn = db.begin().await?;

    if catalog::get_supplier_by_id(&txn, supplier_id).await?.is_none() {
        return Err(Error::SupplierNotFound { id: supplier_id });
    }
    for line in &lines {
        if catalog::get_ingredient_by_id(&txn, line.ingredient_id)
            .await?
            .is_none()
        {
            return Err(Error::IngredientNotFound {
                id: line.ingredient_id.to_string(),
            });
        }
    }

    let now = Utc::now();
    let order = purchase_order::ActiveModel {
        date: Set(now.date_naive()),
        target_date: Set(target_date),
        supplier_id: Set(supplier_id),
        status: Set(OrderStatus::Draft.as_str().to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let order_id = order.id;

    for line in lines {
        purchase_order_item::ActiveModel {
            purchase_order_id: Set(order_id),
            ingredient_id: Set(line.ingredient_id),
            quantity: Set(line.quantity),
            unit: Set(line.unit.trim().to_string()),
            remark: Set(normalize_optional(line.remark)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    load_order_details(db, vec![order])
        .await?
        .pop()
        .ok_or(Error::PurchaseOrderNotFound { id: order_id })
}

/// Loads every purchase order for `target_date`, newest first.
pub async fn get_purchase_orders_by_target_date<C>(
    db: &C,
    target_date: NaiveDate,
) -> Result<Vec<PurchaseOrderDetail>>
where
    C: ConnectionTrait,
{
    let orders = PurchaseOrder::find()
        .filter(purchase_order::Column::TargetDate.eq(target_date))
        .order_by_desc(purchase_order::Column::CreatedAt)
        .order_by_desc(purchase_order::Column::Id)
        .all(db)
        .await?;
    load_order_details(db, orders).await
}

/// Ingredient ids referenced by any line of any order in `orders`.
#[must_use]
pub fn collect_assigned_ids(orders: &[PurchaseOrderDetail]) -> BTreeSet<i64> {
    orders
        .iter()
        .flat_map(|order| order.items.iter().map(|line| line.item.ingredient_id))
        .collect()
}

/// Ingredient ids already on a purchase order for `target_date`, draft or confirmed.
pub async fn get_assigned_ingredient_ids<C>(db: &C, target_date: NaiveDate) -> Result<BTreeSet<i64>>
where
    C: ConnectionTrait,
{
    let orders = get_purchase_orders_by_target_date(db, target_date).await?;
    Ok(collect_assigned_ids(&orders))
}

/// Moves a draft order to confirmed.
///
/// # Errors
/// - [`Error::PurchaseOrderNotFound`] if the order does not exist
/// - [`Error::OrderAlreadyConfirmed`] if it is already confirmed
pub async fn confirm_purchase_order(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<purchase_order::Model> {
    let order = PurchaseOrder::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::PurchaseOrderNotFound { id: order_id })?;

    if order.status == OrderStatus::Confirmed.as_str() {
        return Err(Error::OrderAlreadyConfirmed { id: order_id });
    }

    let mut active: purchase_order::ActiveModel = order.into();
    active.status = Set(OrderStatus::Confirmed.as_str().to_string());
    active.update(db).await.map_err(Into::into)
}

async fn load_order_details<C>(
    db: &C,
    orders: Vec<purchase_order::Model>,
) -> Result<Vec<PurchaseOrderDetail>>
where
    C: ConnectionTrait,
{
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    let items = PurchaseOrderItem::find()
        .filter(purchase_order_item::Column::PurchaseOrderId.is_in(order_ids))
        .order_by_asc(purchase_order_item::Column::Id)
        .all(db)
        .await?;

    let mut ingredient_ids: Vec<i64> = items.iter().map(|i| i.ingredient_id).collect();
    ingredient_ids.sort_unstable();
    ingredient_ids.dedup();
    let ingredients: HashMap<i64, ingredient::Model> = if ingredient_ids.is_empty() {
        HashMap::new()
    } else {
        Ingredient::find()
            .filter(ingredient::Column::Id.is_in(ingredient_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect()
    };

    let mut supplier_ids: Vec<i64> = orders.iter().map(|o| o.supplier_id).collect();
    supplier_ids.sort_unstable();
    supplier_ids.dedup();
    let suppliers: HashMap<i64, supplier::Model> = Supplier::find()
        .filter(supplier::Column::Id.is_in(supplier_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let mut lines_by_order: HashMap<i64, Vec<OrderLine>> = HashMap::new();
    for item in items {
        let ingredient = ingredients
            .get(&item.ingredient_id)
            .cloned()
            .ok_or_else(|| Error::IngredientNotFound {
                id: item.ingredient_id.to_string(),
            })?;
        lines_by_order
            .entry(item.purchase_order_id)
            .or_default()
            .push(OrderLine { item, ingredient });
    }

    Ok(orders
        .into_iter()
        .map(|order| PurchaseOrderDetail {
            supplier: suppliers.get(&order.supplier_id).cloned(),
            items: lines_by_order.remove(&order.id).unwrap_or_default(),
            order,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::menu::MenuStatus;
    use crate::test_utils::*;

    fn line(ingredient_id: i64, quantity: f64, unit: &str) -> OrderLineInput {
        OrderLineInput {
            ingredient_id,
            quantity,
            unit: unit.to_string(),
            remark: None,
        }
    }

    #[tokio::test]
    async fn test_aggregate_empty_date() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(aggregate_ingredients_by_date(&db, test_date()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_sums_across_menus() -> Result<()> {
        let db = setup_test_db().await?;
        let lunch = save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![dish_input(
                "土豆炖牛肉",
                &[("土豆", 10.0, "千克"), ("西红柿", 5.0, "千克")],
            )],
        )
        .await?;
        let dinner = save_test_menu(
            &db,
            "canteen-1",
            "dinner",
            MenuStatus::Submitted,
            vec![
                dish_input("酸辣土豆丝", &[("土豆", 8.0, "千克")]),
                dish_input("番茄炒蛋", &[("西红柿", 6.0, "千克")]),
            ],
        )
        .await?;

        let aggregated = aggregate_ingredients_by_date(&db, test_date()).await?;
        assert_eq!(aggregated.len(), 2);

        let potato = &aggregated[0];
        assert_eq!(potato.ingredient_name, "土豆");
        assert_eq!(potato.total_quantity, 18.0);
        assert_eq!(potato.unit, "千克");
        assert!(!potato.has_mixed_units());
        assert_eq!(
            potato.sources,
            vec![
                IngredientSource {
                    dish_name: "土豆炖牛肉".to_string(),
                    menu_id: lunch.menu.id,
                    quantity: 10.0,
                },
                IngredientSource {
                    dish_name: "酸辣土豆丝".to_string(),
                    menu_id: dinner.menu.id,
                    quantity: 8.0,
                },
            ]
        );

        let tomato = &aggregated[1];
        assert_eq!(tomato.ingredient_name, "西红柿");
        assert_eq!(tomato.total_quantity, 11.0);
        assert_eq!(tomato.sources.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_ignores_drafts_and_other_dates() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![dish_input("红烧肉", &[("五花肉", 500.0, "g")])],
        )
        .await?;
        save_test_menu(
            &db,
            "canteen-2",
            "lunch",
            MenuStatus::Draft,
            vec![dish_input("鱼香肉丝", &[("五花肉", 200.0, "g")])],
        )
        .await?;

        let mut other_day = menu_request(
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![dish_input("红烧肉", &[("五花肉", 300.0, "g")])],
        );
        other_day.key.date = test_date().succ_opt().unwrap();
        menu::save_menu(&db, other_day).await?;

        let aggregated = aggregate_ingredients_by_date(&db, test_date()).await?;
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].total_quantity, 500.0);
        assert_eq!(aggregated[0].sources.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_keeps_first_seen_order() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![
                dish_input("宫保鸡丁", &[("鸡肉", 300.0, "g"), ("花生", 50.0, "g"), ("辣椒", 5.0, "个")]),
                dish_input("麻婆豆腐", &[("豆腐", 2.0, "块"), ("辣椒", 3.0, "个")]),
                dish_input("干煸豆角", &[("豆角", 300.0, "g"), ("辣椒", 4.0, "个")]),
            ],
        )
        .await?;

        let aggregated = aggregate_ingredients_by_date(&db, test_date()).await?;
        let names: Vec<&str> = aggregated
            .iter()
            .map(|a| a.ingredient_name.as_str())
            .collect();
        assert_eq!(names, vec!["鸡肉", "花生", "辣椒", "豆腐", "豆角"]);
        assert_eq!(aggregated[2].total_quantity, 12.0);
        assert_eq!(aggregated[2].sources.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_mixed_units_sums_and_breaks_down() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![
                dish_input("土豆牛腩", &[("土豆", 2.0, "个")]),
                dish_input("土豆泥", &[("土豆", 1.5, "kg")]),
                dish_input("地三鲜", &[("土豆", 1.0, "个")]),
            ],
        )
        .await?;

        let aggregated = aggregate_ingredients_by_date(&db, test_date()).await?;
        let potato = &aggregated[0];
        assert_eq!(potato.total_quantity, 4.5);
        assert_eq!(potato.unit, "个");
        assert!(potato.has_mixed_units());
        assert_eq!(
            potato.unit_breakdown,
            vec![
                UnitSubtotal {
                    unit: "个".to_string(),
                    quantity: 3.0,
                },
                UnitSubtotal {
                    unit: "kg".to_string(),
                    quantity: 1.5,
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_pure_skips_unsubmitted_input() -> Result<()> {
        let db = setup_test_db().await?;
        let draft = save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Draft,
            vec![dish_input("青菜", &[("青菜", 400.0, "g")])],
        )
        .await?;

        assert!(aggregate_ingredients(&[draft]).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_order() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "测试供应商A").await?;
        let potato = catalog::get_or_create_ingredient(&db, "土豆", "千克").await?;

        let order = create_purchase_order(
            &db,
            test_date(),
            supplier.id,
            vec![OrderLineInput {
                ingredient_id: potato.id,
                quantity: 3.0,
                unit: "千克".to_string(),
                remark: Some("要新鲜的".to_string()),
            }],
        )
        .await?;

        assert_eq!(order.status(), OrderStatus::Draft);
        assert_eq!(order.order.target_date, test_date());
        assert_eq!(order.order.date, Utc::now().date_naive());
        assert_eq!(order.supplier.as_ref().map(|s| s.id), Some(supplier.id));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].ingredient.name, "土豆");
        assert_eq!(order.items[0].item.remark.as_deref(), Some("要新鲜的"));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_purchase_order_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "测试供应商A").await?;
        let potato = catalog::get_or_create_ingredient(&db, "土豆", "千克").await?;

        let result = create_purchase_order(&db, test_date(), supplier.id, vec![]).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result =
            create_purchase_order(&db, test_date(), supplier.id, vec![line(potato.id, -2.0, "kg")])
                .await;
        assert!(matches!(result, Err(Error::InvalidQuantity { .. })));

        let result =
            create_purchase_order(&db, test_date(), supplier.id + 99, vec![line(potato.id, 1.0, "kg")])
                .await;
        assert!(matches!(result, Err(Error::SupplierNotFound { .. })));

        let result =
            create_purchase_order(&db, test_date(), supplier.id, vec![line(potato.id + 99, 1.0, "kg")])
                .await;
        assert!(matches!(result, Err(Error::IngredientNotFound { .. })));

        assert!(
            get_purchase_orders_by_target_date(&db, test_date())
                .await?
                .is_empty()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_assigned_ids_union_across_orders_and_statuses() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "测试供应商A").await?;
        let potato = catalog::get_or_create_ingredient(&db, "土豆", "kg").await?;
        let tomato = catalog::get_or_create_ingredient(&db, "西红柿", "kg").await?;
        let egg = catalog::get_or_create_ingredient(&db, "鸡蛋", "个").await?;

        let first = create_purchase_order(
            &db,
            test_date(),
            supplier.id,
            vec![line(potato.id, 1.0, "kg"), line(tomato.id, 1.0, "kg")],
        )
        .await?;
        confirm_purchase_order(&db, first.order.id).await?;
        create_purchase_order(&db, test_date(), supplier.id, vec![line(tomato.id, 2.0, "kg")])
            .await?;
        // Another target date does not count
        create_purchase_order(
            &db,
            test_date().succ_opt().unwrap(),
            supplier.id,
            vec![line(egg.id, 10.0, "个")],
        )
        .await?;

        let assigned = get_assigned_ingredient_ids(&db, test_date()).await?;
        assert_eq!(assigned, BTreeSet::from([potato.id, tomato.id]));

        let orders = get_purchase_orders_by_target_date(&db, test_date()).await?;
        assert_eq!(orders.len(), 2);
        // Newest first
        assert!(orders[0].order.id > orders[1].order.id);
        assert_eq!(orders[1].status(), OrderStatus::Confirmed);
        Ok(())
    }

    #[tokio::test]
    async fn test_pending_pool_excludes_assigned_regardless_of_quantity() -> Result<()> {
        let db = setup_test_db().await?;
        save_test_menu(
            &db,
            "canteen-1",
            "lunch",
            MenuStatus::Submitted,
            vec![dish_input("土豆炖牛肉", &[("土豆", 10.0, "千克"), ("牛腩", 500.0, "g")])],
        )
        .await?;
        save_test_menu(
            &db,
            "canteen-1",
            "dinner",
            MenuStatus::Submitted,
            vec![dish_input("酸辣土豆丝", &[("土豆", 8.0, "千克")])],
        )
        .await?;

        let before = get_pending_pool(&db, test_date()).await?;
        assert_eq!(before.len(), 2);

        let supplier = create_test_supplier(&db, "测试供应商A").await?;
        let potato = catalog::get_ingredient_by_name(&db, "土豆").await?.unwrap();
        // Far less than the 18 needed
        create_purchase_order(&db, test_date(), supplier.id, vec![line(potato.id, 0.5, "千克")])
            .await?;

        let after = get_pending_pool(&db, test_date()).await?;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].ingredient_name, "牛腩");
        Ok(())
    }

    #[test]
    fn test_pending_pool_pure_filter_keeps_order() {
        let record = |id: i64, name: &str| AggregatedIngredient {
            ingredient_id: id,
            ingredient_name: name.to_string(),
            total_quantity: 1.0,
            unit: "kg".to_string(),
            unit_breakdown: Vec::new(),
            sources: Vec::new(),
        };
        let aggregated = vec![record(3, "c"), record(1, "a"), record(2, "b")];
        let pending = pending_pool(aggregated, &BTreeSet::from([1]));
        let ids: Vec<i64> = pending.iter().map(|r| r.ingredient_id).collect();
        assert_eq!(ids, vec![3, 2]);

        assert!(pending_pool(Vec::new(), &BTreeSet::from([1])).is_empty());
    }

    #[tokio::test]
    async fn test_confirm_purchase_order() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = create_test_supplier(&db, "测试供应商A").await?;
        let potato = catalog::get_or_create_ingredient(&db, "土豆", "kg").await?;
        let order =
            create_purchase_order(&db, test_date(), supplier.id, vec![line(potato.id, 1.0, "kg")])
                .await?;

        let confirmed = confirm_purchase_order(&db, order.order.id).await?;
        assert_eq!(confirmed.status, "confirmed");

        assert!(matches!(
            confirm_purchase_order(&db, order.order.id).await,
            Err(Error::OrderAlreadyConfirmed { .. })
        ));
        assert!(matches!(
            confirm_purchase_order(&db, order.order.id + 1).await,
            Err(Error::PurchaseOrderNotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!("confirmed".parse::<OrderStatus>().unwrap(), OrderStatus::Confirmed);
        assert_eq!("DRAFT".parse::<OrderStatus>().unwrap(), OrderStatus::Draft);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
