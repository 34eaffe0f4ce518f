//! Menu reference data.
//!
//! Menu items are owned by the kitchen side; the booking core only reads
//! `available` when deciding whether an item can be booked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub String);

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A dish offered on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub available: bool,
}

impl MenuItem {
    /// Creates an available menu item.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the menu provider
    /// * `name` - Dish name shown to employees
    /// * `description` - Short description
    /// * `category` - Cuisine label (e.g. "South Indian")
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuItemId(id.into()),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            available: true,
        }
    }

    /// Returns the same item marked as sold out.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// The items offered on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub date: NaiveDate,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(date: NaiveDate, items: Vec<MenuItem>) -> Self {
        Self { date, items }
    }

    pub fn find(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn available(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.available)
    }
}
