//! Terminal presentation of the table projection and notifications.
//!
//! Color is applied per row from the core's highlight, and only when stdout
//! is a tty and `NO_COLOR` is unset.

use expiry_core::{Highlight, Kind, Notification, TableView, EMPTY_MESSAGE, LOADING_MESSAGE};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Respect NO_COLOR first; otherwise color only interactive stdout.
pub fn color_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn paint(enabled: bool, code: &str, text: &str) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn print_table(view: &TableView) {
    let use_color = color_enabled();
    match view {
        TableView::Loading => println!("  ⏳ {LOADING_MESSAGE}"),
        TableView::Empty => println!("  {EMPTY_MESSAGE}"),
        TableView::Rows(rows) => {
            println!("{:<6} {:<24} {:>4}  EXPIRY", "ID", "NAME", "QTY");
            for row in rows {
                let line = format!("{:<6} {:<24} {:>4}  {}", row.id, row.name, row.quantity, row.expiry);
                let painted = match row.highlight {
                    Highlight::Expired => paint(use_color, RED, &line),
                    Highlight::ExpiringSoon => paint(use_color, YELLOW, &line),
                    Highlight::None => line,
                };
                println!("{painted}");
            }
        }
    }
}

pub fn print_notification(notification: &Notification) {
    let use_color = color_enabled();
    let (code, tag) = match notification.kind {
        Kind::Success => (GREEN, "ok"),
        Kind::Error => (RED, "error"),
        Kind::Warning => (YELLOW, "warning"),
    };
    println!("{} {}", paint(use_color, code, &format!("[{tag}]")), notification.message);
}

pub fn print_help() {
    println!("commands:");
    println!("  add <name> <quantity> <YYYY-MM-DD>   add a food item");
    println!("  rm <id>                              delete a food item");
    println!("  refresh | r                          reload the list");
    println!("  help                                 show this message");
    println!("  quit | exit | q                      leave");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_text_when_enabled() {
        assert_eq!(paint(true, RED, "boom"), "\x1b[31mboom\x1b[0m");
    }

    #[test]
    fn paint_passes_text_through_when_disabled() {
        assert_eq!(paint(false, RED, "boom"), "boom");
    }
}
