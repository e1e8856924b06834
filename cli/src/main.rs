//! Interactive terminal session for the food-expiry tracker.
//!
//! A read-eval loop around the core controller: every command builds a
//! request, the transport executes it, and the controller's state is
//! re-projected into the table. Mutations are observed by reloading the
//! full list from the server.

mod commands;
mod render;
mod transport;

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use expiry_core::{App, CreateFoodItem};

use crate::commands::Command;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let base_url =
        std::env::var("EXPIRY_API_URL").unwrap_or_else(|_| "http://localhost:9090".to_string());
    let mut app = App::new(&base_url);

    println!("food expiry tracker, connected to {base_url}");
    println!("type 'help' for commands");
    refresh(&mut app);
    drain_notifications(&mut app);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match commands::parse(trimmed) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => render::print_help(),
            Ok(Command::Refresh) => refresh(&mut app),
            Ok(Command::Add {
                name,
                quantity,
                expiry,
            }) => {
                let input = CreateFoodItem {
                    name,
                    quantity,
                    purchase_date: None,
                    expiry_date: expiry,
                };
                if let Some(req) = app.submit_new_item(&input, today(), Utc::now()) {
                    let result = transport::execute(req);
                    if app.finish_create(result, Utc::now()) {
                        refresh(&mut app);
                    }
                }
            }
            Ok(Command::Remove(id)) => {
                let result = transport::execute(app.request_delete(id));
                if app.finish_delete(result, Utc::now()) {
                    refresh(&mut app);
                }
            }
            Err(message) => println!("{message}"),
        }
        drain_notifications(&mut app);
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn refresh(app: &mut App) {
    let req = app.start_refresh();
    render::print_table(&app.table(today()));
    let result = transport::execute(req);
    app.finish_refresh(result, today(), Utc::now());
    render::print_table(&app.table(today()));
}

/// Print queued notifications as they mature, sleeping through the stagger
/// window so delayed warnings are not lost between prompts.
fn drain_notifications(app: &mut App) {
    loop {
        let now = Utc::now();
        for notification in app.notifications.take_due(now) {
            render::print_notification(&notification);
        }
        match app.notifications.next_due(Utc::now()) {
            Some(at) => {
                if let Ok(wait) = (at - Utc::now()).to_std() {
                    thread::sleep(wait);
                }
            }
            None => break,
        }
    }
}
