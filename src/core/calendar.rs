//! Calendar statistics - How many menus each day has, by status.

use crate::{
    core::menu::MenuStatus,
    entities::{Menu, menu},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Menu counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    /// All menus on the day
    pub total: usize,
    /// Menus still in draft
    pub draft: usize,
    /// Submitted menus
    pub submitted: usize,
}

/// Counts menus per date from `(date, status)` pairs.
///
/// Statuses other than draft and submitted count toward `total` only.
#[must_use]
pub fn summarize_statuses<'a, I>(menus: I) -> BTreeMap<NaiveDate, DayStats>
where
    I: IntoIterator<Item = (NaiveDate, &'a str)>,
{
    let mut stats: BTreeMap<NaiveDate, DayStats> = BTreeMap::new();
    for (date, status) in menus {
        let day = stats.entry(date).or_default();
        day.total += 1;
        match status.parse::<MenuStatus>() {
            Ok(MenuStatus::Draft) => day.draft += 1,
            Ok(MenuStatus::Submitted) => day.submitted += 1,
            Err(_) => {}
        }
    }
    stats
}

/// Per-day menu counts for `start..=end`. Days without menus are absent.
pub async fn get_menu_stats(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BTreeMap<NaiveDate, DayStats>> {
    let menus = Menu::find()
        .filter(menu::Column::Date.between(start, end))
        .all(db)
        .await?;
    Ok(summarize_statuses(
        menus.iter().map(|m| (m.date, m.status.as_str())),
    ))
}
