//! Planner state - The editing state a planning UI keeps between saves.
//!
//! [`PlannerState`] is a plain value. It changes only through
//! [`PlannerState::apply`], which consumes the state and an action and returns the
//! next state, so a UI layer can own it however it likes (signal, channel, mutex)
//! without the core knowing. Procurement never reads this state; it works on
//! persisted menus only.
//!
//! Sessions keep editor text as typed: quantities and servings are strings until
//! [`MenuSession::to_save_request`] parses them.

use crate::{
    core::menu::{DishInput, IngredientLineInput, MenuKey, MenuStatus, SaveMenuRequest},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which screen the planner is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Editing menus
    #[default]
    Planning,
    /// Building purchase orders
    Procurement,
}

/// An ingredient row being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDraft {
    /// Client-side row id
    pub id: String,
    /// Ingredient name as typed
    pub name: String,
    /// Quantity as typed
    pub quantity: String,
    /// Unit
    pub unit: String,
    /// Optional note
    #[serde(default)]
    pub remark: Option<String>,
}

/// A dish being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDraft {
    /// Client-side dish id
    pub id: String,
    /// Dish name
    pub name: String,
    /// Planned servings as typed
    pub planned_servings: String,
    /// Preparer
    pub chef_name: String,
    /// Ingredient rows
    pub ingredients: Vec<IngredientDraft>,
    /// Optional note
    #[serde(default)]
    pub remarks: Option<String>,
}

/// The editor's view of one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSession {
    /// Client-side session id
    pub id: String,
    /// Menu date
    pub date: NaiveDate,
    /// Canteen identity
    pub canteen_id: String,
    /// Meal slot identity
    pub meal_id: String,
    /// Draft or submitted; submitted sessions are locked
    pub status: MenuStatus,
    /// Dishes in display order
    pub dishes: Vec<DishDraft>,
}

/// Partial update of a session. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    /// New date
    pub date: Option<NaiveDate>,
    /// New canteen
    pub canteen_id: Option<String>,
    /// New meal slot
    pub meal_id: Option<String>,
    /// New status; submitted sessions ignore a change back to draft
    pub status: Option<MenuStatus>,
    /// Replacement dish list
    pub dishes: Option<Vec<DishDraft>>,
}

/// Partial update of a dish. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishPatch {
    /// New name
    pub name: Option<String>,
    /// New planned servings text
    pub planned_servings: Option<String>,
    /// New preparer
    pub chef_name: Option<String>,
    /// Replacement ingredient rows
    pub ingredients: Option<Vec<IngredientDraft>>,
    /// New note
    pub remarks: Option<Option<String>>,
}

/// Everything that can change planner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerAction {
    /// Switch screens
    SetMode(AppMode),
    /// Replace all sessions (e.g. after loading from the store)
    SetSessions(Vec<MenuSession>),
    /// Append a session
    AddSession(MenuSession),
    /// Patch the session with this id
    UpdateSession {
        /// Session id
        session_id: String,
        /// Changes
        patch: SessionPatch,
    },
    /// Drop the session with this id
    RemoveSession {
        /// Session id
        session_id: String,
    },
    /// Append a dish to a session
    AddDish {
        /// Session id
        session_id: String,
        /// The dish
        dish: DishDraft,
    },
    /// Patch one dish of a session
    UpdateDish {
        /// Session id
        session_id: String,
        /// Dish id
        dish_id: String,
        /// Changes
        patch: DishPatch,
    },
    /// Drop one dish of a session
    RemoveDish {
        /// Session id
        session_id: String,
        /// Dish id
        dish_id: String,
    },
}

/// The whole planner state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerState {
    /// Current screen
    pub mode: AppMode,
    /// All sessions in view
    pub sessions: Vec<MenuSession>,
}

impl MenuSession {
    /// Whether the session is submitted and therefore read-only.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status == MenuStatus::Submitted
    }

    fn apply_patch(mut self, patch: SessionPatch) -> Self {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(canteen_id) = patch.canteen_id {
            self.canteen_id = canteen_id;
        }
        if let Some(meal_id) = patch.meal_id {
            self.meal_id = meal_id;
        }
        if let Some(dishes) = patch.dishes {
            if !self.is_locked() {
                self.dishes = dishes;
            }
        }
        if let Some(status) = patch.status {
            if !(self.is_locked() && status == MenuStatus::Draft) {
                self.status = status;
            }
        }
        self
    }

    /// Converts the editor text into a save request.
    ///
    /// Dishes without a name and ingredient rows without a name are editor
    /// placeholders and are skipped. Blank servings mean "not planned".
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when a named ingredient has a missing or
    /// unparseable quantity, or servings are not a whole number.
    pub fn to_save_request(&self) -> Result<SaveMenuRequest> {
        let dishes = self
            .dishes
            .iter()
            .filter(|d| !d.name.trim().is_empty())
            .map(DishDraft::to_input)
            .collect::<Result<Vec<_>>>()?;

        Ok(SaveMenuRequest {
            key: MenuKey::new(self.date, &self.canteen_id, &self.meal_id)?,
            status: self.status,
            dishes,
        })
    }
}

impl DishDraft {
    fn apply_patch(mut self, patch: DishPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(planned_servings) = patch.planned_servings {
            self.planned_servings = planned_servings;
        }
        if let Some(chef_name) = patch.chef_name {
            self.chef_name = chef_name;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(remarks) = patch.remarks {
            self.remarks = remarks;
        }
        self
    }

    fn to_input(&self) -> Result<DishInput> {
        let servings = self.planned_servings.trim();
        let planned_servings = if servings.is_empty() {
            None
        } else {
            Some(servings.parse::<i32>().map_err(|_| {
                Error::validation(format!(
                    "dish {:?}: planned servings {servings:?} is not a whole number",
                    self.name
                ))
            })?)
        };

        let ingredients = self
            .ingredients
            .iter()
            .filter(|i| !i.name.trim().is_empty())
            .map(|row| {
                let text = row.quantity.trim();
                let quantity = text.parse::<f64>().map_err(|_| {
                    Error::validation(format!(
                        "dish {:?}: quantity {text:?} for {:?} is not a number",
                        self.name, row.name
                    ))
                })?;
                Ok(IngredientLineInput {
                    ingredient_name: row.name.clone(),
                    quantity,
                    unit: row.unit.clone(),
                    remark: row.remark.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DishInput {
            name: self.name.clone(),
            planned_servings,
            chef_name: Some(self.chef_name.clone()),
            remark: self.remarks.clone(),
            ingredients,
        })
    }
}

impl PlannerState {
    /// Returns the state after `action`.
    ///
    /// Dish changes to a locked (submitted) session, and actions naming an
    /// unknown session or dish, leave the state unchanged.
    #[must_use]
    pub fn apply(self, action: PlannerAction) -> Self {
        let Self { mode, sessions } = self;
        match action {
            PlannerAction::SetMode(mode) => Self { mode, sessions },
            PlannerAction::SetSessions(sessions) => Self { mode, sessions },
            PlannerAction::AddSession(session) => {
                let mut sessions = sessions;
                sessions.push(session);
                Self { mode, sessions }
            }
            PlannerAction::UpdateSession { session_id, patch } => Self {
                mode,
                sessions: map_session(sessions, &session_id, |s| s.apply_patch(patch)),
            },
            PlannerAction::RemoveSession { session_id } => Self {
                mode,
                sessions: sessions.into_iter().filter(|s| s.id != session_id).collect(),
            },
            PlannerAction::AddDish { session_id, dish } => Self {
                mode,
                sessions: map_unlocked(sessions, &session_id, |mut s| {
                    s.dishes.push(dish);
                    s
                }),
            },
            PlannerAction::UpdateDish {
                session_id,
                dish_id,
                patch,
            } => Self {
                mode,
                sessions: map_unlocked(sessions, &session_id, |mut s| {
                    s.dishes = s
                        .dishes
                        .into_iter()
                        .map(|d| {
                            if d.id == dish_id {
                                d.apply_patch(patch.clone())
                            } else {
                                d
                            }
                        })
                        .collect();
                    s
                }),
            },
            PlannerAction::RemoveDish {
                session_id,
                dish_id,
            } => Self {
                mode,
                sessions: map_unlocked(sessions, &session_id, |mut s| {
                    s.dishes.retain(|d| d.id != dish_id);
                    s
                }),
            },
        }
    }

    /// The session planned for `(date, canteen_id, meal_id)`, if any.
    #[must_use]
    pub fn session(&self, date: NaiveDate, canteen_id: &str, meal_id: &str) -> Option<&MenuSession> {
        self.sessions
            .iter()
            .find(|s| s.date == date && s.canteen_id == canteen_id && s.meal_id == meal_id)
    }

    /// All sessions on `date`, in insertion order.
    pub fn sessions_by_date(&self, date: NaiveDate) -> impl Iterator<Item = &MenuSession> {
        self.sessions.iter().filter(move |s| s.date == date)
    }
}

fn map_session<F>(sessions: Vec<MenuSession>, session_id: &str, f: F) -> Vec<MenuSession>
where
    F: FnOnce(MenuSession) -> MenuSession,
{
    let mut f = Some(f);
    sessions
        .into_iter()
        .map(|s| match (s.id == session_id, f.take()) {
            (true, Some(update)) => update(s),
            (_, pending) => {
                f = pending;
                s
            }
        })
        .collect()
}

fn map_unlocked<F>(sessions: Vec<MenuSession>, session_id: &str, f: F) -> Vec<MenuSession>
where
    F: FnOnce(MenuSession) -> MenuSession,
{
    map_session(sessions, session_id, |s| if s.is_locked() { s } else { f(s) })
}
