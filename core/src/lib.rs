//! Client core for the food-expiry tracking service.
//!
//! # Overview
//! Fetches, creates, and deletes food items against a REST collection
//! endpoint, classifies each item's expiry into a status band, projects the
//! list into a table, and queues transient notifications, all without
//! touching the network (caller-does-IO pattern). The caller executes the
//! actual HTTP round-trips, making the core fully deterministic and
//! testable.
//!
//! # Design
//! - `FoodItemClient` is stateless: it holds only `base_url`; each
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `App` owns the only mutable state (list + notification queue); the
//!   table is a pure projection of it.
//! - Expiry classification and the notification queue take injected
//!   dates/instants; nothing reads a global clock.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod expiry;
pub mod http;
pub mod notify;
pub mod types;
pub mod view;

pub use app::{App, ListState};
pub use client::FoodItemClient;
pub use error::{ApiError, ValidationError};
pub use expiry::{classify, days_until_expiry, ExpiryBand, Highlight};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{Kind, Notification, NotificationQueue};
pub use types::{CreateFoodItem, FoodItem};
pub use view::{format_date, render, Row, TableView, EMPTY_MESSAGE, LOADING_MESSAGE};
