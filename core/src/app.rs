//! Application controller: owned state, pure table projection.
//!
//! # Design
//! `App` is the single owner of the current list and the notification queue;
//! the table is always a projection of that state, never a store of its own.
//! Each flow keeps the build/execute/parse split: `start_*`/`request_*`
//! produce an `HttpRequest`, the caller runs the round-trip, and `finish_*`
//! consumes the `Result`, so transport failures from the real executor flow
//! through the same path as non-2xx responses.
//!
//! Every failure is terminal for its action: it is logged, surfaced as one
//! error notification, and leaves the controller usable. A failed list load
//! drops to the empty state so the table never shows stale rows. Mutations
//! never touch the list; observing a create or delete requires the next
//! successful refresh.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::error;

use crate::client::FoodItemClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{Kind, NotificationQueue};
use crate::types::{CreateFoodItem, FoodItem};
use crate::view::{render, TableView};

/// Where the current list stands relative to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<FoodItem>),
    Failed,
}

pub struct App {
    client: FoodItemClient,
    list: ListState,
    pub notifications: NotificationQueue,
}

impl App {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: FoodItemClient::new(base_url),
            list: ListState::Loading,
            notifications: NotificationQueue::new(),
        }
    }

    /// Project the current state into a table.
    pub fn table(&self, today: NaiveDate) -> TableView {
        match &self.list {
            ListState::Loading => TableView::Loading,
            ListState::Failed => TableView::Empty,
            ListState::Loaded(items) => render(items, today),
        }
    }

    pub fn start_refresh(&mut self) -> HttpRequest {
        self.list = ListState::Loading;
        self.client.build_list_items()
    }

    pub fn finish_refresh(
        &mut self,
        result: Result<HttpResponse, ApiError>,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) {
        let outcome = result.and_then(|resp| self.client.parse_list_items(resp));
        match outcome {
            Ok(items) => {
                self.notifications.scan_and_warn(&items, today, now);
                self.list = ListState::Loaded(items);
            }
            Err(err) => {
                error!("failed to load food items: {err}");
                self.list = ListState::Failed;
                self.notifications.push(
                    "Failed to load food items. Please check your connection.",
                    Kind::Error,
                    now,
                );
            }
        }
    }

    /// Validate and build the create request. On a validation failure the
    /// user-facing message is queued and no request is built.
    pub fn submit_new_item(
        &mut self,
        input: &CreateFoodItem,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<HttpRequest> {
        if let Err(err) = input.validate(today) {
            self.notifications.push(err.to_string(), Kind::Error, now);
            return None;
        }
        match self.client.build_create_item(input) {
            Ok(req) => Some(req),
            Err(err) => {
                error!("failed to encode create request: {err}");
                self.notifications
                    .push("Failed to add food item. Please try again.", Kind::Error, now);
                None
            }
        }
    }

    /// Returns true when the item was created; callers re-list to observe it.
    pub fn finish_create(&mut self, result: Result<HttpResponse, ApiError>, now: DateTime<Utc>) -> bool {
        let outcome = result.and_then(|resp| self.client.parse_create_item(resp));
        match outcome {
            Ok(()) => {
                self.notifications
                    .push("Food item added successfully!", Kind::Success, now);
                true
            }
            Err(err) => {
                error!("failed to add food item: {err}");
                self.notifications
                    .push("Failed to add food item. Please try again.", Kind::Error, now);
                false
            }
        }
    }

    pub fn request_delete(&self, id: u64) -> HttpRequest {
        self.client.build_delete_item(id)
    }

    /// Returns true when the item was deleted; callers re-list to observe it.
    pub fn finish_delete(&mut self, result: Result<HttpResponse, ApiError>, now: DateTime<Utc>) -> bool {
        let outcome = result.and_then(|resp| self.client.parse_delete_item(resp));
        match outcome {
            Ok(()) => {
                self.notifications
                    .push("Food item deleted successfully!", Kind::Success, now);
                true
            }
            Err(err) => {
                error!("failed to delete food item: {err}");
                self.notifications
                    .push("Failed to delete food item. Please try again.", Kind::Error, now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SLIDE_IN_MS;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn ok_list(body: &str) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn status(code: u16) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: code,
            headers: Vec::new(),
            body: String::new(),
        })
    }

    fn app() -> App {
        App::new("http://localhost:9090")
    }

    #[test]
    fn table_shows_loading_before_first_fetch_completes() {
        assert_eq!(app().table(today()), TableView::Loading);
    }

    #[test]
    fn successful_refresh_replaces_the_table() {
        let mut app = app();
        let _req = app.start_refresh();
        app.finish_refresh(
            ok_list(r#"[{"id":1,"name":"Milk","quantity":2,"expiryDate":"2025-06-11"}]"#),
            today(),
            now(),
        );
        let TableView::Rows(rows) = app.table(today()) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Milk");
    }

    #[test]
    fn two_refreshes_with_same_payload_render_identically() {
        let body = r#"[
            {"id":1,"name":"Milk","quantity":2,"expiryDate":"2025-06-11"},
            {"id":2,"name":"Eggs","quantity":12,"expiryDate":"2025-06-03"}
        ]"#;
        let mut app = app();
        app.finish_refresh(ok_list(body), today(), now());
        let first = app.table(today());
        let _req = app.start_refresh();
        app.finish_refresh(ok_list(body), today(), now() + Duration::seconds(5));
        assert_eq!(first, app.table(today()));
    }

    #[test]
    fn failed_refresh_shows_empty_state_and_one_error_notification() {
        let mut app = app();
        let _req = app.start_refresh();
        app.finish_refresh(status(500), today(), now());

        assert_eq!(app.table(today()), TableView::Empty);
        assert_eq!(app.notifications.len(), 1);
        let shown = app.notifications.visible(now() + Duration::milliseconds(SLIDE_IN_MS));
        assert_eq!(shown[0].kind, Kind::Error);
        assert_eq!(shown[0].message, "Failed to load food items. Please check your connection.");
    }

    #[test]
    fn transport_failure_takes_the_same_path_as_a_bad_status() {
        let mut app = app();
        app.finish_refresh(
            Err(ApiError::Transport("connection refused".to_string())),
            today(),
            now(),
        );
        assert_eq!(app.table(today()), TableView::Empty);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn failed_refresh_discards_previously_loaded_rows() {
        let mut app = app();
        app.finish_refresh(
            ok_list(r#"[{"id":1,"name":"Milk","quantity":2,"expiryDate":"2025-06-11"}]"#),
            today(),
            now(),
        );
        let _req = app.start_refresh();
        app.finish_refresh(status(502), today(), now() + Duration::seconds(1));
        assert_eq!(app.table(today()), TableView::Empty);
    }

    #[test]
    fn refresh_scans_the_loaded_list_for_warnings() {
        let mut app = app();
        app.finish_refresh(
            ok_list(r#"[{"id":1,"name":"Old","quantity":1,"expiryDate":"2025-05-20"}]"#),
            today(),
            now(),
        );
        assert_eq!(app.notifications.len(), 1);
        let due = app.notifications.take_due(now() + Duration::seconds(2));
        assert_eq!(due[0].message, "⚠️ You have 1 expired item!");
    }

    #[test]
    fn submit_with_past_date_is_rejected_without_building_a_request() {
        let mut app = app();
        let input = CreateFoodItem {
            name: "Milk".to_string(),
            quantity: 2,
            purchase_date: None,
            expiry_date: today() - Duration::days(1),
        };
        assert!(app.submit_new_item(&input, today(), now()).is_none());
        assert_eq!(app.notifications.len(), 1);
        let due = app.notifications.take_due(now() + Duration::milliseconds(SLIDE_IN_MS));
        assert_eq!(due[0].message, "Expiry date cannot be in the past");
        assert_eq!(due[0].kind, Kind::Error);
    }

    #[test]
    fn submit_with_valid_input_builds_the_exact_post() {
        let mut app = app();
        let input = CreateFoodItem {
            name: "Milk".to_string(),
            quantity: 2,
            purchase_date: None,
            expiry_date: today() + Duration::days(3),
        };
        let req = app.submit_new_item(&input, today(), now()).unwrap();
        assert_eq!(req.path, "http://localhost:9090/api/fooditems");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Milk");
        assert_eq!(body["quantity"], 2);
        assert_eq!(body["expiryDate"], "2025-06-04");
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn finish_create_reports_success_and_failure() {
        let mut app = app();
        assert!(app.finish_create(status(200), now()));
        assert!(!app.finish_create(status(500), now()));
        assert_eq!(app.notifications.len(), 2);
        let due = app.notifications.take_due(now() + Duration::seconds(1));
        assert_eq!(due[0].message, "Food item added successfully!");
        assert_eq!(due[1].message, "Failed to add food item. Please try again.");
    }

    #[test]
    fn failed_delete_leaves_the_table_unchanged() {
        let mut app = app();
        app.finish_refresh(
            ok_list(r#"[{"id":1,"name":"Milk","quantity":2,"expiryDate":"2025-06-11"}]"#),
            today(),
            now(),
        );
        let before = app.table(today());

        let req = app.request_delete(999);
        assert_eq!(req.path, "http://localhost:9090/api/fooditems/999");
        assert!(!app.finish_delete(status(404), now()));

        assert_eq!(app.table(today()), before);
        let due = app.notifications.take_due(now() + Duration::seconds(1));
        assert!(due.iter().any(|n| n.message == "Failed to delete food item. Please try again."));
    }

    #[test]
    fn successful_delete_queues_a_success_notification() {
        let mut app = app();
        assert!(app.finish_delete(status(204), now()));
        let due = app.notifications.take_due(now() + Duration::seconds(1));
        assert_eq!(due[0].message, "Food item deleted successfully!");
        assert_eq!(due[0].kind, Kind::Success);
    }
}
