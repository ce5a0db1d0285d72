//! # Text Driver
//!
//! Line-oriented front end for the commands. One command per line in, one
//! JSON document per line out.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "inc 2" ──► Command::parse ──┬─► Ok(Some(cmd)) ──► dispatch ──┐        │
//! │                               │                                │        │
//! │                               ├─► Ok(None)   (blank line)      │        │
//! │                               │                                ▼        │
//! │                               └─► Err(ParseError) ──► {"ok":false,...}  │
//! │                                                                         │
//! │  dispatch ──► Ok(data)  ──► {"ok":true,"data":{...}}                    │
//! │           └─► Err(e)    ──► {"ok":false,"error":{"code":...}}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::{json, Value};
use storefront_core::RawQuantity;
use thiserror::Error;
use tracing::{debug, warn};

use crate::commands::{cart, config, loading, product};
use crate::error::ApiError;
use crate::AppState;

/// Lines shown by `help`.
pub const HELP: &[(&str, &str)] = &[
    ("products", "Show the product list for the current search and category"),
    ("search <text>", "Set the search text (no text clears it)"),
    ("category <name>", "Select a category ('all' for every category)"),
    ("categories [query]", "List category options matching the query"),
    ("qty <id> [value]", "Set a quantity picker (no value clears it)"),
    ("inc <id>", "Press + on a quantity picker"),
    ("dec <id>", "Press - on a quantity picker"),
    ("cart", "Show the cart summary"),
    ("reload", "Replay the simulated catalog fetch"),
    ("status", "Show the loading flag"),
    ("config", "Show the configuration"),
    ("help", "Show this list"),
    ("quit", "Exit"),
];

/// A parsed driver line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Search(String),
    Category(String),
    Categories(Option<String>),
    ChangeQuantity { product_id: u32, value: RawQuantity },
    Increment(u32),
    Decrement(u32),
    Cart,
    Reload,
    Status,
    Config,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::bad_command(err.to_string())
    }
}

impl Command {
    /// Parses one line. Blank lines yield `Ok(None)`.
    ///
    /// Keywords are case-insensitive. Arguments are taken as typed, except
    /// that the separator after the keyword is dropped.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let line = line.trim_start();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "products" => Command::Products,
            "search" => Command::Search(rest.to_string()),
            "category" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "category",
                        argument: "a category name",
                    });
                }
                Command::Category(name.to_string())
            }
            "categories" => {
                let query = rest.trim();
                Command::Categories((!query.is_empty()).then(|| query.to_string()))
            }
            "qty" => {
                let rest = rest.trim_start();
                let (id, value) = match rest.split_once(char::is_whitespace) {
                    Some((id, value)) => (id, value.trim()),
                    None => (rest, ""),
                };
                Command::ChangeQuantity {
                    product_id: parse_product_id("qty", id)?,
                    value: RawQuantity::text(value),
                }
            }
            "inc" => Command::Increment(parse_product_id("inc", rest.trim())?),
            "dec" => Command::Decrement(parse_product_id("dec", rest.trim())?),
            "cart" => Command::Cart,
            "reload" => Command::Reload,
            "status" => Command::Status,
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_product_id(command: &'static str, raw: &str) -> Result<u32, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "a product id",
        });
    }
    raw.parse::<u32>()
        .map_err(|_| ParseError::InvalidProductId(raw.to_string()))
}

/// What the driver loop should do after a line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Write this document to stdout
    Respond(Value),
    /// Nothing to write (blank line)
    Ignore,
    /// Stop reading input
    Quit,
}

/// Parses and runs one line, producing the response envelope.
pub fn handle_line(state: &AppState, line: &str) -> LineOutcome {
    let command = match Command::parse(line) {
        Ok(Some(Command::Quit)) => return LineOutcome::Quit,
        Ok(Some(command)) => command,
        Ok(None) => return LineOutcome::Ignore,
        Err(err) => return LineOutcome::Respond(failure(err.into())),
    };

    debug!(?command, "Dispatching");
    match dispatch(state, command) {
        Ok(data) => LineOutcome::Respond(json!({ "ok": true, "data": data })),
        Err(err) => LineOutcome::Respond(failure(err)),
    }
}

fn failure(err: ApiError) -> Value {
    warn!(code = ?err.code, message = %err.message, "Command failed");
    json!({ "ok": false, "error": err })
}

/// Runs a parsed command against the application state.
pub fn dispatch(state: &AppState, command: Command) -> Result<Value, ApiError> {
    let AppState {
        catalog,
        session,
        loading,
        config,
    } = state;

    match command {
        Command::Products => to_value(product::search_products(catalog, session, loading, config)),
        Command::Search(text) => {
            to_value(product::set_search(catalog, session, loading, config, text))
        }
        Command::Category(name) => {
            to_value(product::set_category(catalog, session, loading, config, name)?)
        }
        Command::Categories(query) => to_value(product::list_categories(catalog, session, query)),
        Command::ChangeQuantity { product_id, value } => to_value(cart::change_quantity(
            catalog, session, loading, config, product_id, value,
        )?),
        Command::Increment(product_id) => to_value(cart::increment_quantity(
            catalog, session, loading, config, product_id,
        )?),
        Command::Decrement(product_id) => to_value(cart::decrement_quantity(
            catalog, session, loading, config, product_id,
        )?),
        Command::Cart => to_value(cart::get_cart(catalog, session, loading, config)),
        Command::Reload => to_value(loading::simulate_fetch(loading)),
        Command::Status => to_value(loading::loading_status(loading)),
        Command::Config => to_value(config::get_config(config)),
        Command::Help => Ok(help()),
        Command::Quit => Ok(Value::Null),
    }
}

fn to_value<T: Serialize>(response: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(response)?)
}

fn help() -> Value {
    HELP.iter()
        .map(|(usage, description)| json!({ "usage": usage, "description": description }))
        .collect()
}
