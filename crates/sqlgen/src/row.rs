//! Rows of field/value pairs for INSERT statements.

use std::fmt;

/// An ordered mapping of field name to raw value expression.
///
/// Setting a field that is already present overwrites its value and keeps its
/// position.
///
/// ```rust
/// use sqlgen::Row;
///
/// let row = Row::new().value("name", "'alice'").value("age", 30);
/// assert_eq!(row.fields().collect::<Vec<_>>(), ["name", "age"]);
/// assert_eq!(row.values().collect::<Vec<_>>(), ["'alice'", "30"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    entries: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (builder form).
    pub fn value(mut self, field: &str, value: impl fmt::Display) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field in place.
    pub fn insert(&mut self, field: &str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(f, _)| f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field.to_string(), value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    /// `(<v1>, <v2>, ...)` in insertion order.
    pub(crate) fn values_tuple(&self) -> String {
        format!("({})", self.values().collect::<Vec<_>>().join(", "))
    }
}

impl<K: AsRef<str>, V: fmt::Display> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (field, value) in iter {
            row.insert(field.as_ref(), value);
        }
        row
    }
}

impl<K: AsRef<str>, V: fmt::Display, const N: usize> From<[(K, V); N]> for Row {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: fmt::Display> From<Vec<(K, V)>> for Row {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// One or more rows passed to a single `insert` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertRows(pub Vec<Row>);

impl InsertRows {
    /// Column names taken from the first row.
    pub(crate) fn leading_fields(&self) -> Vec<String> {
        self.0
            .first()
            .map(|row| row.fields().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl From<Row> for InsertRows {
    fn from(row: Row) -> Self {
        InsertRows(vec![row])
    }
}

impl From<Vec<Row>> for InsertRows {
    fn from(rows: Vec<Row>) -> Self {
        InsertRows(rows)
    }
}

impl<const N: usize> From<[Row; N]> for InsertRows {
    fn from(rows: [Row; N]) -> Self {
        InsertRows(rows.into())
    }
}

impl<K: AsRef<str>, V: fmt::Display, const N: usize> From<[(K, V); N]> for InsertRows {
    fn from(pairs: [(K, V); N]) -> Self {
        InsertRows(vec![Row::from(pairs)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let row = Row::new().value("a", 1).value("b", 2).value("a", 3);
        assert_eq!(row.iter().collect::<Vec<_>>(), [("a", "3"), ("b", "2")]);
        assert_eq!(row.get("a"), Some("3"));
        assert_eq!(row.get("c"), None);
    }

    #[test]
    fn values_tuple() {
        let row = Row::from([("a", 1), ("b", 2)]);
        assert_eq!(row.values_tuple(), "(1, 2)");
    }

    #[test]
    fn leading_fields_come_from_first_row() {
        let rows = InsertRows::from([Row::from([("a", 1), ("b", 2)]), Row::from([("c", 3)])]);
        assert_eq!(rows.leading_fields(), ["a", "b"]);
        assert!(InsertRows::default().leading_fields().is_empty());
    }
}
