//! Line-oriented command parsing for the interactive session.
//!
//! Parse failures are user-facing messages; a line that fails to parse
//! never reaches the network.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        quantity: u32,
        expiry: NaiveDate,
    },
    Remove(u64),
    Refresh,
    Help,
    Quit,
}

/// Parse a non-empty input line. Item names may contain spaces: the last
/// two tokens of an `add` line are the quantity and the expiry date.
pub fn parse(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] | ["q"] => Ok(Command::Quit),
        ["refresh"] | ["r"] => Ok(Command::Refresh),
        ["rm", id] => id
            .parse::<u64>()
            .map(Command::Remove)
            .map_err(|_| format!("'{id}' is not a valid item id")),
        ["rm", ..] => Err("usage: rm <id>".to_string()),
        ["add", rest @ ..] if rest.len() >= 3 => {
            let expiry_raw = rest[rest.len() - 1];
            let quantity_raw = rest[rest.len() - 2];
            let name = rest[..rest.len() - 2].join(" ");
            let quantity = quantity_raw
                .parse::<u32>()
                .map_err(|_| format!("'{quantity_raw}' is not a valid quantity (whole number expected)"))?;
            let expiry = NaiveDate::parse_from_str(expiry_raw, "%Y-%m-%d")
                .map_err(|_| format!("'{expiry_raw}' is not a valid date (expected YYYY-MM-DD)"))?;
            Ok(Command::Add {
                name,
                quantity,
                expiry,
            })
        }
        ["add", ..] => Err("usage: add <name> <quantity> <YYYY-MM-DD>".to_string()),
        [cmd, ..] => Err(format!("unknown command '{cmd}' (type 'help' for commands)")),
        [] => Err("type 'help' for commands".to_string()),
    }
}
