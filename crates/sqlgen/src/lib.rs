//! # sqlgen
//!
//! A small fluent builder that assembles SQL statements as plain text.
//!
//! ## Features
//!
//! - **Chained calls**: `select`/`insert`/`update`/`delete`/`alter_table`, then tables,
//!   fields, conditions, SET pairs, rows and LIMIT in any order
//! - **Text in, text out**: nothing is quoted, escaped or bound; inputs are concatenated
//!   as given and callers are responsible for safety
//! - **Reusable**: `get_sql` clears the statement state so one instance builds many
//!   statements
//! - **Opt-in checks**: misuse is recorded while chaining and surfaced by `validate` /
//!   `try_get_sql`; strict mode also rejects incomplete statements
//! - **Logging**: rendered statements are emitted via `tracing` (feature `tracing`)
//!
//! ## Example
//!
//! ```rust
//! use sqlgen::{Row, SqlGenerator};
//!
//! let mut sql = SqlGenerator::new();
//!
//! assert_eq!(
//!     sql.select("*").from("users").where_field("name").like("'%ann%'").get_sql(false),
//!     "SELECT * FROM users WHERE name LIKE '%ann%'"
//! );
//!
//! assert_eq!(
//!     sql.insert([
//!         Row::from([("id", 1), ("age", 30)]),
//!         Row::from([("id", 2), ("age", 41)]),
//!     ])
//!     .into_table("users")
//!     .get_sql(true),
//!     "INSERT INTO users (id, age) VALUES (1, 30), (2, 41);"
//! );
//!
//! assert_eq!(
//!     sql.update("users").set("age", 31).where_("id", "= 1").get_sql(false),
//!     "UPDATE users SET age = 31 WHERE id = 1"
//! );
//! ```
//!
//! ## Not thread-safe by sharing
//!
//! All mutators take `&mut self`; one statement-building sequence owns its
//! generator. Share across threads only behind external synchronization.

pub mod action;
pub mod condition;
pub mod config;
pub mod error;
pub mod generator;
pub mod row;
pub mod value;

mod trace;

pub use action::Action;
pub use condition::{ConditionList, FieldState};
pub use config::GeneratorConfig;
pub use error::{SqlGenError, SqlGenResult};
pub use generator::{RenderSnapshot, SqlGenerator};
pub use row::{InsertRows, Row};
pub use value::{InValues, Joiner, Limit, Names};
