//! Menu business logic - Saving, submitting, loading and deleting menus.
//!
//! A menu is identified by its `(date, canteen, meal)` key. Saving a menu replaces
//! all of its dishes with the ones in the request, creating any ingredient named
//! for the first time. Menus start as drafts; once submitted they count toward
//! procurement and cannot return to draft.
//!
//! Loaded menus come back as [`MenuDetail`] trees (menu, dishes, usage lines with
//! their ingredient), visited in id order so callers see a stable ordering.

use crate::{
    core::{catalog, normalize_optional, require_text, validate_quantity},
    entities::{Dish, DishIngredient, Ingredient, Menu, dish, dish_ingredient, ingredient, menu},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuStatus {
    /// Still being edited; ignored by procurement
    Draft,
    /// Locked and counted toward procurement
    Submitted,
}

impl MenuStatus {
    /// The persisted form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for MenuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            other => Err(Error::validation(format!("unknown menu status {other:?}"))),
        }
    }
}

/// Identifies one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuKey {
    /// Day the menu is served
    pub date: NaiveDate,
    /// Canteen identity
    pub canteen_id: String,
    /// Meal slot identity
    pub meal_id: String,
}

impl MenuKey {
    /// Builds a key, trimming and validating the canteen and meal ids.
    pub fn new(date: NaiveDate, canteen_id: &str, meal_id: &str) -> Result<Self> {
        Ok(Self {
            date,
            canteen_id: require_text(canteen_id, "Canteen id")?,
            meal_id: require_text(meal_id, "Meal id")?,
        })
    }

    fn not_found(&self) -> Error {
        Error::MenuNotFound {
            date: crate::core::format_date(self.date),
            canteen_id: self.canteen_id.clone(),
            meal_id: self.meal_id.clone(),
        }
    }
}

/// One ingredient line in a save request. The ingredient is named, not referenced
/// by id, and is created on first use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineInput {
    /// Ingredient name
    pub ingredient_name: String,
    /// Quantity required
    pub quantity: f64,
    /// Unit of the quantity, also used as canonical unit if the ingredient is new
    pub unit: String,
    /// Optional note
    #[serde(default)]
    pub remark: Option<String>,
}

/// One dish in a save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishInput {
    /// Dish name
    pub name: String,
    /// Planned serving count
    #[serde(default)]
    pub planned_servings: Option<i32>,
    /// Responsible preparer
    #[serde(default)]
    pub chef_name: Option<String>,
    /// Free-form note
    #[serde(default)]
    pub remark: Option<String>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<IngredientLineInput>,
}

/// A full menu to save, replacing whatever is stored under the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMenuRequest {
    /// Menu key
    #[serde(flatten)]
    pub key: MenuKey,
    /// Status after saving
    pub status: MenuStatus,
    /// Dishes, in display order
    pub dishes: Vec<DishInput>,
}

/// A usage line together with the ingredient it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    /// The stored line
    #[serde(flatten)]
    pub usage: dish_ingredient::Model,
    /// The referenced ingredient
    pub ingredient: ingredient::Model,
}

/// A dish with its ingredient lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDetail {
    /// The stored dish
    #[serde(flatten)]
    pub dish: dish::Model,
    /// Ingredient lines, in id order
    pub ingredients: Vec<IngredientLine>,
}

/// A menu with its dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDetail {
    /// The stored menu
    #[serde(flatten)]
    pub menu: menu::Model,
    /// Dishes, in id order
    pub dishes: Vec<DishDetail>,
}

impl MenuDetail {
    /// Parsed status of the menu. Unknown stored values read as draft.
    #[must_use]
    pub fn status(&self) -> MenuStatus {
        self.menu.status.parse().unwrap_or(MenuStatus::Draft)
    }
}

struct ValidatedLine {
    name: String,
    quantity: f64,
    unit: String,
    remark: Option<String>,
}

struct ValidatedDish {
    name: String,
    planned_servings: Option<i32>,
    chef_name: Option<String>,
    remark: Option<String>,
    lines: Vec<ValidatedLine>,
}

fn validate_dishes(dishes: Vec<DishInput>) -> Result<Vec<ValidatedDish>> {
    dishes
        .into_iter()
        .map(|input| {
            if let Some(servings) = input.planned_servings {
                if servings < 0 {
                    return Err(Error::validation(format!(
                        "planned servings cannot be negative (got {servings})"
                    )));
                }
            }
            let lines = input
                .ingredients
                .into_iter()
                .map(|line| {
                    validate_quantity(line.quantity)?;
                    Ok(ValidatedLine {
                        name: require_text(&line.ingredient_name, "Ingredient name")?,
                        quantity: line.quantity,
                        unit: require_text(&line.unit, "Ingredient unit")?,
                        remark: normalize_optional(line.remark),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ValidatedDish {
                name: require_text(&input.name, "Dish name")?,
                planned_servings: input.planned_servings,
                chef_name: normalize_optional(input.chef_name),
                remark: normalize_optional(input.remark),
                lines,
            })
        })
        .collect()
}

async fn find_menu<C>(db: &C, key: &MenuKey) -> Result<Option<menu::Model>>
where
    C: ConnectionTrait,
{
    Menu::find()
        .filter(menu::Column::Date.eq(key.date))
        .filter(menu::Column::CanteenId.eq(key.canteen_id.as_str()))
        .filter(menu::Column::MealId.eq(key.meal_id.as_str()))
        .one(db)
        .await
        .map_err(Into::into)
}

async fn delete_dishes<C>(db: &C, menu_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let dish_ids: Vec<i64> = Dish::find()
        .filter(dish::Column::MenuId.eq(menu_id))
        .all(db)
        .await?
        .into_iter()
        .map(|d| d.id)
        .collect();
    if dish_ids.is_empty() {
        return Ok(());
    }

    DishIngredient::delete_many()
        .filter(dish_ingredient::Column::DishId.is_in(dish_ids))
        .exec(db)
        .await?;
    Dish::delete_many()
        .filter(dish::Column::MenuId.eq(menu_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Saves a menu under its key, creating it or replacing its dishes.
///
/// All input is validated before anything is written; the writes happen in one
/// store transaction. Ingredients are looked up by name and created on first use.
///
/// # Errors
/// Returns an error if:
/// - A dish name, ingredient name or unit is blank
/// - A quantity is negative or not finite, or planned servings are negative
/// - The stored menu is submitted and the request asks for draft
/// - The store fails
pub async fn save_menu(db: &DatabaseConnection, request: SaveMenuRequest) -> Result<MenuDetail> {
    let key = MenuKey::new(request.key.date, &request.key.canteen_id, &request.key.meal_id)?;
    let dishes = validate_dishes(request.dishes)?;
    let now = Utc::now();

    let txn = db.begin().await?;

    let menu = match find_menu(&txn, &key).await? {
        Some(existing) => {
            if existing.status == MenuStatus::Submitted.as_str()
                && request.status == MenuStatus::Draft
            {
                return Err(Error::MenuAlreadySubmitted {
                    menu_id: existing.id,
                });
            }
            delete_dishes(&txn, existing.id).await?;
            let mut active: menu::ActiveModel = existing.into();
            active.status = Set(request.status.as_str().to_string());
            active.updated_at = Set(now);
            active.update(&txn).await?
        }
        None => {
            menu::ActiveModel {
                date: Set(key.date),
                canteen_id: Set(key.canteen_id.clone()),
                meal_id: Set(key.meal_id.clone()),
                status: Set(request.status.as_str().to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    for input in dishes {
        let stored = dish::ActiveModel {
            menu_id: Set(menu.id),
            name: Set(input.name),
            planned_servings: Set(input.planned_servings),
            chef_name: Set(input.chef_name),
            remark: Set(input.remark),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for line in input.lines {
            let ingredient = catalog::get_or_create_ingredient(&txn, &line.name, &line.unit).await?;
            dish_ingredient::ActiveModel {
                dish_id: Set(stored.id),
                ingredient_id: Set(ingredient.id),
                quantity: Set(line.quantity),
                unit: Set(line.unit),
                remark: Set(line.remark),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    load_menu_details(db, vec![menu])
        .await?
        .pop()
        .ok_or_else(|| key.not_found())
}

/// Marks a menu as submitted.
///
/// Submitting an already submitted menu is a no-op that returns it unchanged.
///
/// # Errors
/// Returns [`Error::MenuNotFound`] if no menu has this key.
pub async fn submit_menu(db: &DatabaseConnection, key: &MenuKey) -> Result<menu::Model> {
    let existing = find_menu(db, key).await?.ok_or_else(|| key.not_found())?;
    if existing.status == MenuStatus::Submitted.as_str() {
        return Ok(existing);
    }

    let mut active: menu::ActiveModel = existing.into();
    active.status = Set(MenuStatus::Submitted.as_str().to_string());
    active.updated_at = Set(Utc::now());
    active.update(db).await.map_err(Into::into)
}

/// Loads one menu with its dishes, or `None` if nothing is stored under the key.
pub async fn get_menu(db: &DatabaseConnection, key: &MenuKey) -> Result<Option<MenuDetail>> {
    match find_menu(db, key).await? {
        Some(menu) => Ok(load_menu_details(db, vec![menu]).await?.pop()),
        None => Ok(None),
    }
}

/// Loads every menu for a date, in creation order.
pub async fn get_menus_by_date(db: &DatabaseConnection, date: NaiveDate) -> Result<Vec<MenuDetail>> {
    let menus = Menu::find()
        .filter(menu::Column::Date.eq(date))
        .order_by_asc(menu::Column::CreatedAt)
        .order_by_asc(menu::Column::Id)
        .all(db)
        .await?;
    load_menu_details(db, menus).await
}

/// Loads every menu with `start <= date <= end`, in date order.
pub async fn get_menus_by_date_range(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<MenuDetail>> {
    let menus = Menu::find()
        .filter(menu::Column::Date.between(start, end))
        .order_by_asc(menu::Column::Date)
        .order_by_asc(menu::Column::Id)
        .all(db)
        .await?;
    load_menu_details(db, menus).await
}

/// Loads the submitted menus for a date, in id order. This is what procurement reads.
pub async fn get_submitted_menus<C>(db: &C, date: NaiveDate) -> Result<Vec<MenuDetail>>
where
    C: ConnectionTrait,
{
    let menus = Menu::find()
        .filter(menu::Column::Date.eq(date))
        .filter(menu::Column::Status.eq(MenuStatus::Submitted.as_str()))
        .order_by_asc(menu::Column::Id)
        .all(db)
        .await?;
    load_menu_details(db, menus).await
}

/// Deletes a menu together with its dishes and their ingredient lines.
///
/// # Errors
/// Returns [`Error::MenuNotFound`] if no menu has this key.
pub async fn delete_menu(db: &DatabaseConnection, key: &MenuKey) -> Result<()> {
    let txn = db.begin().await?;
    let existing = find_menu(&txn, key).await?.ok_or_else(|| key.not_found())?;
    delete_dishes(&txn, existing.id).await?;
    Menu::delete_by_id(existing.id).exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}

/// Expands menus into [`MenuDetail`] trees, keeping the order of `menus`.
///
/// Three queries regardless of the number of menus: dishes, usage lines, ingredients.
pub async fn load_menu_details<C>(db: &C, menus: Vec<menu::Model>) -> Result<Vec<MenuDetail>>
where
    C: ConnectionTrait,
{
    if menus.is_empty() {
        return Ok(Vec::new());
    }

    let menu_ids: Vec<i64> = menus.iter().map(|m| m.id).collect();
    let dishes = Dish::find()
        .filter(dish::Column::MenuId.is_in(menu_ids))
        .order_by_asc(dish::Column::Id)
        .all(db)
        .await?;

    let dish_ids: Vec<i64> = dishes.iter().map(|d| d.id).collect();
    let usages = if dish_ids.is_empty() {
        Vec::new()
    } else {
        DishIngredient::find()
            .filter(dish_ingredient::Column::DishId.is_in(dish_ids))
            .order_by_asc(dish_ingredient::Column::Id)
            .all(db)
            .await?
    };

    let mut ingredient_ids: Vec<i64> = usages.iter().map(|u| u.ingredient_id).collect();
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

    let mut lines_by_dish: HashMap<i64, Vec<IngredientLine>> = HashMap::new();
    for usage in usages {
        let ingredient = ingredients
            .get(&usage.ingredient_id)
            .cloned()
            .ok_or_else(|| Error::IngredientNotFound {
                id: usage.ingredient_id.to_string(),
            })?;
        lines_by_dish
            .entry(usage.dish_id)
            .or_default()
            .push(IngredientLine { usage, ingredient });
    }

    let mut dishes_by_menu: HashMap<i64, Vec<DishDetail>> = HashMap::new();
    for dish in dishes {
        let ingredients = lines_by_dish.remove(&dish.id).unwrap_or_default();
        dishes_by_menu
            .entry(dish.menu_id)
            .or_default()
            .push(DishDetail { dish, ingredients });
    }

    Ok(menus
        .into_iter()
        .map(|menu| {
            let dishes = dishes_by_menu.remove(&menu.id).unwrap_or_default();
            MenuDetail { menu, dishes }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_menu_status_round_trip() {
        assert_eq!("draft".parse::<MenuStatus>().unwrap(), MenuStatus::Draft);
        assert_eq!(
            " Submitted ".parse::<MenuStatus>().unwrap(),
            MenuStatus::Submitted
        );
        assert!("published".parse::<MenuStatus>().is_err());
        assert_eq!(MenuStatus::Submitted.to_string(), "submitted");
    }

    #[test]
    fn test_menu_key_validation() {
        let date = test_date();
        assert!(MenuKey::new(date, " canteen-1 ", "lunch").is_ok());
        assert!(matches!(
            MenuKey::new(date, "", "lunch"),
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            MenuKey::new(date, "canteen-1", "  "),
            Err(Error::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_menu_creates_menu_and_ingredients() -> Result<()> {
        let db = setup_test_db().await?;
        let request = menu_request(
            "canteen-1",
            "lunch",
            MenuStatus::Draft,
            vec![
                dish_input("西红柿炒蛋", &[("西红柿", 2.0, "个"), ("鸡蛋", 3.0, "个")]),
                dish_input("扬州炒饭", &[("鸡蛋", 2.0, "个")]),
            ],
        );

        let saved = save_menu(&db, request).await?;
        assert_eq!(saved.status(), MenuStatus::Draft);
        assert_eq!(saved.menu.canteen_id, "canteen-1");
        assert_eq!(saved.dishes.len(), 2);
        assert_eq!(saved.dishes[0].dish.name, "西红柿炒蛋");
        assert_eq!(saved.dishes[0].ingredients.len(), 2);
        assert_eq!(saved.dishes[0].ingredients[1].ingredient.name, "鸡蛋");

        // Same ingredient reused across dishes
        let egg_a = saved.dishes[0].ingredients[1].ingredient.id;
        let egg_b = saved.dishes[1].ingredients[0].ingredient.id;
        assert_eq!(egg_a, egg_b);
        assert_eq!(catalog::list_ingredients(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_menu_replaces_dishes() -> Result<()> {
        let db = setup_test_db().await?;
        let first = save_menu(
            &db,
            menu_request(
                "canteen-1",
                "lunch",
                MenuStatus::Draft,
                vec![dish_input("红烧肉", &[("五花肉", 500.0, "g")])],
            ),
        )
        .await?;

        let second = save_menu(
            &db,
            menu_request(
                "canteen-1",
                "lunch",
                MenuStatus::Draft,
                vec![
                    dish_input("清炒时蔬", &[("青菜", 400.0, "g")]),
                    dish_input("红烧茄子", &[("茄子", 2.0, "个")]),
                ],
            ),
        )
        .await?;

        assert_eq!(first.menu.id, second.menu.id);
        let names: Vec<&str> = second.dishes.iter().map(|d| d.dish.name.as_str()).collect();
        assert_eq!(names, vec!["清炒时蔬", "红烧茄子"]);

        // Old dish rows and lines are gone
        assert_eq!(Dish::find().all(&db).await?.len(), 2);
        assert_eq!(DishIngredient::find().all(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_menu_validation_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;

        let bad_quantity = menu_request(
            "canteen-1",
            "lunch",
            MenuStatus::Draft,
            vec![dish_input("土豆丝", &[("土豆", -1.0, "kg")])],
        );
        assert!(matches!(
            save_menu(&db, bad_quantity).await,
            Err(Error::InvalidQuantity { .. })
        ));

        let blank_dish = menu_request(
            "canteen-1",
            "lunch",
            MenuStatus::Draft,
            vec![dish_input("  ", &[("土豆", 1.0, "kg")])],
        );
        assert!(matches!(
            save_menu(&db, blank_dish).await,
            Err(Error::Validation { .. })
        ));

        let mut negative_servings = dish_input("土豆丝", &[("土豆", 1.0, "kg")]);
        negative_servings.planned_servings = Some(-5);
        let request = menu_request("canteen-1", "lunch", MenuStatus::Draft, vec![negative_servings]);
        assert!(matches!(
            save_menu(&db, request).await,
            Err(Error::Validation { .. })
        ));

        assert!(Menu::find().all(&db).await?.is_empty());
        assert!(catalog::list_ingredients(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_submitted_menu_cannot_return_to_draft() -> Result<()> {
        let db = setup_test_db().await?;
        let submitted = save_menu(
            &db,
            menu_request(
                "canteen-1",
                "dinner",
                MenuStatus::Submitted,
                vec![dish_input("酸菜鱼", &[("鱼", 1.0, "条")])],
            ),
        )
        .await?;

        let result = save_menu(
            &db,
            menu_request("canteen-1", "dinner", MenuStatus::Draft, vec![]),
        )
        .await;
        assert!(matches!(
            result,
            Err(Error::MenuAlreadySubmitted { menu_id }) if menu_id == submitted.menu.id
        ));

        // Saving again as submitted is allowed
        let resaved = save_menu(
            &db,
            menu_request(
                "canteen-1",
                "dinner",
                MenuStatus::Submitted,
                vec![dish_input("啤酒鸭", &[("鸭肉", 600.0, "g")])],
            ),
        )
        .await?;
        assert_eq!(resaved.dishes[0].dish.name, "啤酒鸭");
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_menu() -> Result<()> {
        let db = setup_test_db().await?;
        let key = MenuKey::new(test_date(), "canteen-2", "breakfast")?;

        assert!(matches!(
            submit_menu(&db, &key).await,
            Err(Error::MenuNotFound { .. })
        ));

        save_menu(
            &db,
            menu_request("canteen-2", "breakfast", MenuStatus::Draft, vec![]),
        )
        .await?;
        let submitted = submit_menu(&db, &key).await?;
        assert_eq!(submitted.status, "submitted");

        // Idempotent
        let again = submit_menu(&db, &key).await?;
        assert_eq!(again.id, submitted.id);
        assert_eq!(again.status, "submitted");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_menus_by_date_and_range() -> Result<()> {
        let db = setup_test_db().await?;
        let day1 = test_date();
        let day2 = day1.succ_opt().unwrap();
        let day3 = day2.succ_opt().unwrap();

        for (date, meal) in [(day2, "lunch"), (day1, "lunch"), (day1, "dinner"), (day3, "lunch")] {
            let mut request = menu_request("canteen-1", meal, MenuStatus::Draft, vec![]);
            request.key.date = date;
            save_menu(&db, request).await?;
        }

        let on_day1 = get_menus_by_date(&db, day1).await?;
        let meals: Vec<&str> = on_day1.iter().map(|m| m.menu.meal_id.as_str()).collect();
        assert_eq!(meals, vec!["lunch", "dinner"]);

        let range = get_menus_by_date_range(&db, day1, day2).await?;
        let dates: Vec<NaiveDate> = range.iter().map(|m| m.menu.date).collect();
        assert_eq!(dates, vec![day1, day1, day2]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_and_delete_menu() -> Result<()> {
        let db = setup_test_db().await?;
        let key = MenuKey::new(test_date(), "canteen-1", "lunch")?;
        save_menu(
            &db,
            menu_request(
                "canteen-1",
                "lunch",
                MenuStatus::Draft,
                vec![dish_input("麻婆豆腐", &[("豆腐", 2.0, "块")])],
            ),
        )
        .await?;

        let loaded = get_menu(&db, &key).await?.unwrap();
        assert_eq!(loaded.dishes[0].ingredients[0].usage.quantity, 2.0);

        delete_menu(&db, &key).await?;
        assert!(get_menu(&db, &key).await?.is_none());
        assert!(Dish::find().all(&db).await?.is_empty());
        assert!(DishIngredient::find().all(&db).await?.is_empty());
        // Ingredients are reference data and survive
        assert_eq!(catalog::list_ingredients(&db).await?.len(), 1);

        assert!(matches!(
            delete_menu(&db, &key).await,
            Err(Error::MenuNotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_submitted_menus_skips_drafts() -> Result<()> {
        let db = setup_test_db().await?;
        save_menu(
            &db,
            menu_request("canteen-1", "lunch", MenuStatus::Submitted, vec![]),
        )
        .await?;
        save_menu(
            &db,
            menu_request("canteen-1", "dinner", MenuStatus::Draft, vec![]),
        )
        .await?;

        let submitted = get_submitted_menus(&db, test_date()).await?;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].menu.meal_id, "lunch");
        Ok(())
    }
}
