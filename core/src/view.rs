//! Table projection of the item list.
//!
//! # Design
//! `render` is a pure function from the item list to a `TableView`; the
//! view retains no state of its own. Rows are data-bound descriptors: each
//! carries the item id, which is the dispatch key for the delete action, so
//! no presentation layer ever needs to synthesize per-row handlers.
//!
//! Sorting always operates on the raw expiry date; the formatted date string
//! is presentation-only.

use chrono::NaiveDate;

use crate::expiry::{classify, days_until_expiry, Highlight};
use crate::types::FoodItem;

/// Placeholder text for an empty (or failed) list.
pub const EMPTY_MESSAGE: &str = "No food items added yet. Start by adding your first item!";

/// Placeholder text while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading food items...";

/// One rendered row. `id` doubles as the delete-dispatch key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    /// Formatted date plus classification label, e.g. "Jun 1, 2025 ⚠️ Expires Today".
    pub expiry: String,
    pub highlight: Highlight,
}

/// The full table state: a loading placeholder, an empty-state placeholder,
/// or one row per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Rows(Vec<Row>),
}

/// Project `items` into a table, sorted ascending by expiry date. The sort
/// is stable: items sharing a date keep their input order.
pub fn render(items: &[FoodItem], today: NaiveDate) -> TableView {
    if items.is_empty() {
        return TableView::Empty;
    }
    let mut sorted: Vec<&FoodItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.expiry_date);

    let rows = sorted
        .into_iter()
        .map(|item| {
            let band = classify(days_until_expiry(item.expiry_date, today));
            Row {
                id: item.id,
                name: item.name.clone(),
                quantity: item.quantity,
                expiry: format!("{} {}", format_date(item.expiry_date), band.label()),
                highlight: band.highlight(),
            }
        })
        .collect();
    TableView::Rows(rows)
}

/// Short month/day/year, e.g. "Jan 5, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
