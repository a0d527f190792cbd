//! Name-based dispatch over every command, used by the `bookshelf` binary

use crate::modules::book::{Book, ReadingStatus};
use crate::modules::library::commands::*;
use crate::modules::library::LibrarySort;
use crate::modules::provider::commands::*;
use crate::shared::errors::{AppError, AppResult};
use crate::AppState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Every command with its argument synopsis
pub const COMMANDS: &[(&str, &str)] = &[
    ("search", "<query>"),
    ("save", "<book-json>"),
    ("list", "[recent|author|title]"),
    ("status", "<book-id> <to-read|reading|completed> [rfc3339-date]"),
    ("delete", "<book-id>"),
    ("stats", ""),
    ("export", ""),
    ("import", "<library-json>"),
];

pub fn usage() -> String {
    let mut text = String::from("Usage: bookshelf <command> [args]\n\nCommands:\n");
    for (name, args) in COMMANDS {
        text.push_str(&format!("  {:<8} {}\n", name, args));
    }
    text
}

/// Run `command` with positional `args` and return its JSON output
pub async fn dispatch(state: &AppState, command: &str, args: &[String]) -> AppResult<Value> {
    match command {
        "search" => to_json(search_books(state, args.join(" ")).await?),
        "save" => {
            let book: Book = serde_json::from_str(required(args, 0, "book-json")?)?;
            to_json(save_book(state, book).await?)
        }
        "list" => {
            let sort = args
                .first()
                .map(|raw| raw.parse::<LibrarySort>())
                .transpose()?;
            to_json(list_library(state, sort).await?)
        }
        "status" => {
            let book_id = required(args, 0, "book-id")?.to_string();
            let status: ReadingStatus = required(args, 1, "status")?.parse()?;
            let completion_date = args
                .get(2)
                .map(|raw| DateTime::parse_from_rfc3339(raw).map(|d| d.with_timezone(&Utc)))
                .transpose()?;
            to_json(update_reading_status(state, book_id, status, completion_date).await?)
        }
        "delete" => {
            delete_book(state, required(args, 0, "book-id")?.to_string()).await?;
            Ok(Value::Null)
        }
        "stats" => to_json(reading_statistics(state).await?),
        "export" => Ok(serde_json::from_str(&export_library(state).await?)?),
        "import" => {
            let payload = required(args, 0, "library-json")?.to_string();
            to_json(import_library(state, payload).await?)
        }
        other => Err(AppError::InvalidInput(format!(
            "Unknown command '{}'\n\n{}",
            other,
            usage()
        ))),
    }
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> AppResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| AppError::InvalidInput(format!("Missing argument <{}>", name)))
}

fn to_json<T: Serialize>(value: T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}
