//! Expiry classification: pure functions over injected dates.
//!
//! # Design
//! Both operands of the day count are calendar dates, so the count is a
//! stable whole-day difference: an item expiring today is 0 days out at any
//! time of day. `classify` is total over the integers; every day count maps
//! to exactly one band.

use chrono::NaiveDate;

/// Whole days from `today` until `expiry`. Negative once the date has passed.
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Status band for an item, derived from its day count. Bands that are
/// still in the future carry the count for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryBand {
    /// Day count below zero.
    Expired,
    /// Day count exactly zero.
    ExpiresToday,
    /// 1 to 3 days out.
    ExpiresSoon(i64),
    /// 4 to 7 days out.
    ExpiresThisWeek(i64),
    /// More than 7 days out.
    Fresh(i64),
}

pub fn classify(days: i64) -> ExpiryBand {
    match days {
        d if d < 0 => ExpiryBand::Expired,
        0 => ExpiryBand::ExpiresToday,
        d @ 1..=3 => ExpiryBand::ExpiresSoon(d),
        d @ 4..=7 => ExpiryBand::ExpiresThisWeek(d),
        d => ExpiryBand::Fresh(d),
    }
}

/// Row treatment derived from the band. `Expired` and the urgent bands get
/// distinct highlights; everything else is unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Expired,
    ExpiringSoon,
    None,
}

impl ExpiryBand {
    /// Display glyph and label shown next to the formatted date.
    pub fn label(&self) -> String {
        match self {
            ExpiryBand::Expired => "🔴 EXPIRED".to_string(),
            ExpiryBand::ExpiresToday => "⚠️ Expires Today".to_string(),
            ExpiryBand::ExpiresSoon(1) => "⚠️ Expires in 1 day".to_string(),
            ExpiryBand::ExpiresSoon(d) => format!("⚠️ Expires in {d} days"),
            ExpiryBand::ExpiresThisWeek(d) => format!("🟡 Expires in {d} days"),
            ExpiryBand::Fresh(d) => format!("🟢 {d} days left"),
        }
    }

    pub fn highlight(&self) -> Highlight {
        match self {
            ExpiryBand::Expired => Highlight::Expired,
            ExpiryBand::ExpiresToday | ExpiryBand::ExpiresSoon(_) => Highlight::ExpiringSoon,
            ExpiryBand::ExpiresThisWeek(_) | ExpiryBand::Fresh(_) => Highlight::None,
        }
    }
}
