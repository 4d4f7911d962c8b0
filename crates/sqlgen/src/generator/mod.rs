//! Fluent statement generator.
//!
//! [`SqlGenerator`] accumulates statement intent through chained calls and
//! renders it into one SQL string.
//!
//! ## Design
//!
//! - SQL is plain text: field names, tables, conditions and values are
//!   concatenated exactly as given. Nothing is quoted or bound.
//! - Chaining never fails. Malformed state renders as malformed SQL; misuse of
//!   the pending-field protocol is recorded and surfaced by [`SqlGenerator::validate`].
//! - [`SqlGenerator::render`] is pure. [`SqlGenerator::get_sql`] renders and then
//!   clears the statement state so the instance can build the next statement.

mod render;

pub use render::RenderSnapshot;

use crate::action::Action;
use crate::condition::{ConditionList, FieldState};
use crate::config::GeneratorConfig;
use crate::error::{SqlGenError, SqlGenResult};
use crate::row::{InsertRows, Row};
use crate::trace;
use crate::value::{InValues, Joiner, Limit, Names};
use std::fmt;

/// Chainable SQL statement generator.
///
/// # Example
///
/// ```rust
/// use sqlgen::SqlGenerator;
///
/// let mut sql = SqlGenerator::new();
/// let text = sql
///     .select(["id", "name"])
///     .from("users")
///     .where_("status", "= 'active'")
///     .where_field("role_id")
///     .in_([1, 2])
///     .limit(10)
///     .get_sql(false);
/// assert_eq!(
///     text,
///     "SELECT id, name FROM users WHERE status = 'active' AND role_id IN (1, 2) LIMIT 10"
/// );
///
/// // The instance is clean again.
/// assert_eq!(sql.delete("users").where_("id", "= 7").get_sql(true), "DELETE FROM users WHERE id = 7;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlGenerator {
    config: GeneratorConfig,
    action: Action,
    tables: Vec<String>,
    fields: Vec<String>,
    conditions: ConditionList,
    pending: FieldState,
    /// UPDATE `SET` pairs, ordered; re-setting overwrites in place
    set_values: Row,
    insert_rows: Vec<Row>,
    limit: Option<Limit>,
    order_by: Option<String>,
    /// Caller-supplied statement that overrides generation
    raw_sql: Option<String>,
    snapshots: RenderSnapshot,
    /// First precondition violation recorded while chaining
    build_error: Option<SqlGenError>,
}

impl SqlGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with the given configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ==================== Statement selection ====================

    /// Start a SELECT and append projection fields.
    pub fn select(&mut self, fields: impl Into<Names>) -> &mut Self {
        self.set_fields(fields);
        self.action = Action::Select;
        self
    }

    /// Start an INSERT with one or more rows.
    ///
    /// Rows are appended to any rows from earlier `insert` calls. The column
    /// list is replaced by the fields of the first row passed here; every row's
    /// values are rendered in that row's own order.
    pub fn insert(&mut self, rows: impl Into<InsertRows>) -> &mut Self {
        let rows = rows.into();
        self.action = Action::Insert;
        self.fields = rows.leading_fields();
        self.insert_rows.extend(rows.0);
        self
    }

    /// Start an UPDATE and append tables.
    pub fn update(&mut self, tables: impl Into<Names>) -> &mut Self {
        self.set_tables(tables);
        self.action = Action::Update;
        self
    }

    /// Start a DELETE and append tables.
    pub fn delete(&mut self, tables: impl Into<Names>) -> &mut Self {
        self.action = Action::Delete;
        self.set_tables(tables);
        self
    }

    /// Start an ALTER TABLE skeleton. Conditions and limits are not rendered for it.
    pub fn alter_table(&mut self, table: impl Into<Names>) -> &mut Self {
        self.set_tables(table);
        self.action = Action::AlterTable;
        self
    }

    // ==================== Tables / fields ====================

    /// Append one or more tables.
    pub fn set_tables(&mut self, tables: impl Into<Names>) -> &mut Self {
        tables.into().append_to(&mut self.tables);
        self
    }

    /// Append one or more fields.
    pub fn set_fields(&mut self, fields: impl Into<Names>) -> &mut Self {
        fields.into().append_to(&mut self.fields);
        self
    }

    /// Alias for `set_tables`.
    pub fn from(&mut self, tables: impl Into<Names>) -> &mut Self {
        self.set_tables(tables)
    }

    /// Alias for `set_tables`, reads naturally after `insert`.
    pub fn into_table(&mut self, table: impl Into<Names>) -> &mut Self {
        self.set_tables(table)
    }

    /// Alias for `set_tables`.
    pub fn table(&mut self, table: impl Into<Names>) -> &mut Self {
        self.set_tables(table)
    }

    /// Alias for `set_tables`.
    pub fn tables(&mut self, tables: impl Into<Names>) -> &mut Self {
        self.set_tables(tables)
    }

    // ==================== Values ====================

    /// Set an UPDATE pair. Setting the same field again overwrites its value.
    pub fn set(&mut self, field: &str, value: impl fmt::Display) -> &mut Self {
        self.set_values.insert(field, value);
        self
    }

    /// Set LIMIT verbatim (`10`, `"5, 10"`, ...). `0` and `""` render no LIMIT.
    pub fn limit(&mut self, limit: impl fmt::Display) -> &mut Self {
        self.limit = Some(Limit::new(limit));
        self
    }

    /// Set the ORDER BY expression of a SELECT (last call wins).
    pub fn order_by(&mut self, expr: &str) -> &mut Self {
        self.order_by = Some(expr.to_string());
        self
    }

    /// Use a hand-written statement instead of generating one.
    ///
    /// The override is consumed by the next `get_sql`, like any other state.
    pub fn set_sql(&mut self, sql: &str) -> &mut Self {
        self.raw_sql = Some(sql.to_string());
        self
    }

    // ==================== Conditions ====================

    /// Add `<field> <condition>`, joined with AND.
    pub fn where_(&mut self, field: &str, condition: &str) -> &mut Self {
        self.where_with(field, condition, Joiner::And)
    }

    /// Add `<field> <condition>` with an explicit joiner.
    ///
    /// The first condition never carries its joiner.
    pub fn where_with(&mut self, field: &str, condition: &str, joiner: Joiner) -> &mut Self {
        self.conditions.push(field, condition, joiner);
        self
    }

    /// Stage `field` for a following `in_(..)` or `like(..)`. Adds no condition.
    pub fn where_field(&mut self, field: &str) -> &mut Self {
        self.pending.stage(field);
        self
    }

    /// Add a raw boolean expression with no field label, joined with AND.
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn where_raw(&mut self, expression: &str) -> &mut Self {
        self.where_raw_with(expression, Joiner::And)
    }

    /// Add a raw boolean expression with an explicit joiner.
    pub fn where_raw_with(&mut self, expression: &str, joiner: Joiner) -> &mut Self {
        self.conditions.push_raw(expression, joiner);
        self
    }

    /// Add a condition joined with AND.
    pub fn and_sql(&mut self, field: &str, condition: &str) -> &mut Self {
        self.where_with(field, condition, Joiner::And)
    }

    /// Add a condition joined with OR.
    pub fn or_sql(&mut self, field: &str, condition: &str) -> &mut Self {
        self.where_with(field, condition, Joiner::Or)
    }

    /// `<pending field> LIKE <pattern>`, joined with AND.
    ///
    /// Consumes the field staged by `where_field`. Without one the field renders
    /// empty and a [`SqlGenError::PendingFieldMissing`] is recorded.
    pub fn like(&mut self, pattern: &str) -> &mut Self {
        let field = self.take_pending("like");
        self.like_with(&field, pattern, Joiner::And)
    }

    /// `<field> LIKE <pattern>`, joined with AND.
    pub fn like_field(&mut self, field: &str, pattern: &str) -> &mut Self {
        self.like_with(field, pattern, Joiner::And)
    }

    /// `<field> LIKE <pattern>` with an explicit joiner.
    pub fn like_with(&mut self, field: &str, pattern: &str, joiner: Joiner) -> &mut Self {
        self.where_with(field, &format!("LIKE {pattern}"), joiner)
    }

    /// `<pending field> IN (<values>)`, joined with AND.
    ///
    /// Consumes the field staged by `where_field`. Without one the field renders
    /// empty and a [`SqlGenError::PendingFieldMissing`] is recorded.
    pub fn in_(&mut self, values: impl Into<InValues>) -> &mut Self {
        let field = self.take_pending("in");
        self.in_with(&field, values, Joiner::And)
    }

    /// `<field> IN (<values>)`, joined with AND.
    pub fn in_field(&mut self, field: &str, values: impl Into<InValues>) -> &mut Self {
        self.in_with(field, values, Joiner::And)
    }

    /// `<field> IN (<values>)` with an explicit joiner.
    pub fn in_with(
        &mut self,
        field: &str,
        values: impl Into<InValues>,
        joiner: Joiner,
    ) -> &mut Self {
        let values = values.into();
        self.where_with(field, &format!("IN ({})", values.joined()), joiner)
    }

    fn take_pending(&mut self, operation: &'static str) -> String {
        match self.pending.take() {
            Some(field) => field,
            None => {
                trace::pending_field_missing(operation);
                self.record_error(SqlGenError::pending_field_missing(operation));
                String::new()
            }
        }
    }

    fn record_error(&mut self, err: SqlGenError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    // ==================== Output ====================

    /// Render, clear the statement state, and return the SQL.
    ///
    /// With `terminator` the statement ends with `;`. Snapshots of the joined
    /// tables/fields/conditions are refreshed and survive the clear.
    pub fn get_sql(&mut self, terminator: bool) -> String {
        let mut sql = self.render();
        if self.raw_sql.is_none() {
            self.snapshots = self.snapshot();
        }
        if terminator {
            sql.push(';');
        }
        trace::rendered(
            self.action,
            &sql,
            terminator,
            self.config.max_logged_sql_length,
        );
        self.reset(false);
        sql
    }

    /// `get_sql` using the configured terminator setting.
    pub fn sql(&mut self) -> String {
        self.get_sql(self.config.terminate_statements)
    }

    /// Validate, then `get_sql`. On error nothing is cleared.
    pub fn try_get_sql(&mut self, terminator: bool) -> SqlGenResult<String> {
        self.validate()?;
        Ok(self.get_sql(terminator))
    }

    /// Stringify and clear, like `get_sql(false)`.
    ///
    /// Note that this *consumes the statement*: a second call returns an empty
    /// string. Use [`render`](Self::render) or `Display` to look without clearing.
    pub fn take_sql(&mut self) -> String {
        self.get_sql(false)
    }

    /// Clear all per-statement state. `clear_snapshots` also drops the joined
    /// snapshots kept from the last render.
    pub fn reset(&mut self, clear_snapshots: bool) -> &mut Self {
        self.action = Action::None;
        self.tables.clear();
        self.fields.clear();
        self.conditions.clear();
        self.pending = FieldState::Idle;
        self.set_values = Row::new();
        self.insert_rows.clear();
        self.limit = None;
        self.order_by = None;
        self.raw_sql = None;
        self.build_error = None;

        let clear_snapshots = clear_snapshots || self.config.clear_snapshots_on_reset;
        if clear_snapshots {
            self.snapshots = RenderSnapshot::default();
        }
        trace::reset(clear_snapshots);
        self
    }

    /// Check recorded build errors and, in strict mode, statement completeness.
    pub fn validate(&self) -> SqlGenResult<()> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if !self.config.strict || self.raw_sql.is_some() {
            return Ok(());
        }

        if !self.action.is_none()
            && !self.action.accepts_conditions()
            && !self.conditions.is_empty()
        {
            return Err(SqlGenError::validation(format!(
                "{} does not render WHERE conditions",
                self.action
            )));
        }

        let require_tables = || {
            if self.tables.is_empty() {
                Err(SqlGenError::validation(format!(
                    "{} requires at least one table",
                    self.action
                )))
            } else {
                Ok(())
            }
        };

        match self.action {
            Action::None => Err(SqlGenError::validation("no statement action selected")),
            Action::Select => {
                require_tables()?;
                if self.fields.is_empty() {
                    return Err(SqlGenError::validation(
                        "SELECT requires at least one field",
                    ));
                }
                Ok(())
            }
            Action::Update => {
                require_tables()?;
                if self.set_values.is_empty() {
                    return Err(SqlGenError::validation(
                        "UPDATE requires at least one SET pair",
                    ));
                }
                Ok(())
            }
            Action::Insert => {
                require_tables()?;
                if self.insert_rows.is_empty() {
                    return Err(SqlGenError::validation(
                        "INSERT requires at least one row",
                    ));
                }
                for (i, row) in self.insert_rows.iter().enumerate() {
                    if row.len() != self.fields.len() {
                        return Err(SqlGenError::validation(format!(
                            "INSERT row {} has {} values but {} fields",
                            i,
                            row.len(),
                            self.fields.len()
                        )));
                    }
                }
                Ok(())
            }
            Action::Delete | Action::AlterTable => require_tables(),
        }
    }

    // ==================== Accessors ====================

    /// The statement kind currently selected.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Joined strings kept from the last generated render.
    pub fn snapshots(&self) -> &RenderSnapshot {
        &self.snapshots
    }

    pub fn pending_field(&self) -> Option<&str> {
        self.pending.pending()
    }

    pub fn build_error(&self) -> Option<&SqlGenError> {
        self.build_error.as_ref()
    }

    pub fn conditions(&self) -> &[String] {
        self.conditions.fragments()
    }
}

/// Pure rendering; unlike [`SqlGenerator::take_sql`] this never clears state.
impl fmt::Display for SqlGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
