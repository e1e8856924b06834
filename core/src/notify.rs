//! Transient notification queue with an injected clock.
//!
//! # Design
//! Nothing here touches a real timer. A pushed notification becomes visible
//! a short slide-in delay after `now`, holds for four seconds, then expires;
//! all of that is encoded as visibility windows on plain data, so consumers
//! and tests drive the queue with whatever instants they like. Entries may
//! overlap and duplicates are never suppressed.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::warn;

use crate::expiry::{classify, days_until_expiry, ExpiryBand};
use crate::types::FoodItem;

/// Delay before a freshly pushed notification becomes visible.
pub const SLIDE_IN_MS: i64 = 100;

/// How long a notification stays visible once shown.
pub const DISPLAY_MS: i64 = 4000;

const EXPIRED_WARNING_DELAY_MS: i64 = 1500;
const EXPIRING_WARNING_DELAY_MS: i64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: Kind,
    pub visible_from: DateTime<Utc>,
    pub visible_until: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message that slides in shortly after `now`.
    pub fn push(&mut self, message: impl Into<String>, kind: Kind, now: DateTime<Utc>) {
        self.push_at(message, kind, now + Duration::milliseconds(SLIDE_IN_MS));
    }

    fn push_at(&mut self, message: impl Into<String>, kind: Kind, visible_from: DateTime<Utc>) {
        self.entries.push(Notification {
            message: message.into(),
            kind,
            visible_from,
            visible_until: visible_from + Duration::milliseconds(DISPLAY_MS),
        });
    }

    /// Entries currently on screen at `now`.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.entries
            .iter()
            .filter(|n| n.visible_from <= now && now < n.visible_until)
            .collect()
    }

    /// Remove and return every entry whose slide-in time has arrived, in
    /// insertion order. For consumers that show each message exactly once.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.visible_from <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due
    }

    /// Drop entries whose display window has fully passed.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|n| n.visible_until > now);
    }

    /// The next instant at which a not-yet-visible entry appears.
    pub fn next_due(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .map(|n| n.visible_from)
            .filter(|&at| at > now)
            .min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Post-load scan: raises at most one aggregate warning for the expired
    /// partition and one for the soon-expiring partition (0 to 3 days out),
    /// staggered so they never appear at the same instant. Memoryless: every
    /// scan re-raises for items still in the same band.
    pub fn scan_and_warn(&mut self, items: &[FoodItem], today: NaiveDate, now: DateTime<Utc>) {
        let mut expired = 0usize;
        let mut expiring = 0usize;
        for item in items {
            match classify(days_until_expiry(item.expiry_date, today)) {
                ExpiryBand::Expired => expired += 1,
                ExpiryBand::ExpiresToday | ExpiryBand::ExpiresSoon(_) => expiring += 1,
                _ => {}
            }
        }

        if expired > 0 {
            let message = if expired == 1 {
                "⚠️ You have 1 expired item!".to_string()
            } else {
                format!("⚠️ You have {expired} expired items!")
            };
            warn!("{expired} expired item(s) in the list");
            self.push_at(
                message,
                Kind::Error,
                now + Duration::milliseconds(EXPIRED_WARNING_DELAY_MS),
            );
        }

        if expiring > 0 {
            let message = if expiring == 1 {
                "⚠️ 1 item is expiring soon!".to_string()
            } else {
                format!("⚠️ {expiring} items are expiring soon!")
            };
            warn!("{expiring} item(s) expiring within 3 days");
            self.push_at(
                message,
                Kind::Warning,
                now + Duration::milliseconds(EXPIRING_WARNING_DELAY_MS),
            );
        }
    }
}
