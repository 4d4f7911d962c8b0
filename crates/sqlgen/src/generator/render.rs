use super::SqlGenerator;
use crate::action::Action;

/// Joined strings computed during the last generated render.
///
/// They are kept after `get_sql` clears the statement state and only dropped by
/// `reset(true)` (or every reset when `clear_snapshots_on_reset` is configured).
/// A raw-SQL render leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Tables joined with `", "`
    pub tables: Option<String>,
    /// Fields joined with `", "`
    pub fields: Option<String>,
    /// Condition fragments joined with `" "`
    pub conditions: Option<String>,
}

impl RenderSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tables.is_none() && self.fields.is_none() && self.conditions.is_none()
    }
}

impl SqlGenerator {
    /// Render the accumulated state without modifying it.
    ///
    /// A raw statement set via `set_sql` is returned unchanged. An empty string is
    /// returned when no action has been selected.
    pub fn render(&self) -> String {
        if let Some(raw) = &self.raw_sql {
            return raw.clone();
        }

        let tables = self.tables.join(", ");
        let mut sql = String::from(self.action.keyword());

        match self.action {
            Action::Select => {
                sql.push(' ');
                sql.push_str(&self.fields.join(", "));
                sql.push_str(" FROM ");
                sql.push_str(&tables);
                self.push_conditions(&mut sql);
                self.push_order_by(&mut sql);
                self.push_limit(&mut sql);
            }
            Action::Update => {
                sql.push(' ');
                sql.push_str(&tables);
                sql.push_str(" SET");
                // Pairs are space separated, without commas.
                for (field, value) in self.set_values.iter() {
                    sql.push(' ');
                    sql.push_str(field);
                    sql.push_str(" = ");
                    sql.push_str(value);
                }
                self.push_conditions(&mut sql);
                self.push_limit(&mut sql);
            }
            Action::Insert => {
                sql.push_str(" INTO ");
                sql.push_str(&tables);
                sql.push_str(" (");
                sql.push_str(&self.fields.join(", "));
                sql.push_str(") VALUES ");
                let tuples: Vec<String> =
                    self.insert_rows.iter().map(|row| row.values_tuple()).collect();
                sql.push_str(&tuples.join(", "));
            }
            Action::Delete => {
                sql.push_str(" FROM ");
                sql.push_str(&tables);
                self.push_conditions(&mut sql);
                self.push_limit(&mut sql);
            }
            Action::AlterTable => {
                sql.push(' ');
                sql.push_str(&tables);
            }
            Action::None => {}
        }

        sql
    }

    pub(super) fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tables: Some(self.tables.join(", ")),
            fields: Some(self.fields.join(", ")),
            conditions: Some(self.conditions.joined()),
        }
    }

    fn push_conditions(&self, sql: &mut String) {
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.joined());
        }
    }

    fn push_order_by(&self, sql: &mut String) {
        if let Some(order) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
    }

    fn push_limit(&self, sql: &mut String) {
        if let Some(limit) = self.limit.as_ref().filter(|l| l.is_truthy()) {
            sql.push_str(" LIMIT ");
            sql.push_str(limit.as_str());
        }
    }
}
