//! Argument types accepted by the chainable API.
//!
//! None of these quote or escape anything: values are rendered exactly as
//! their `Display` output.

use crate::error::SqlGenError;
use std::fmt;
use std::str::FromStr;

/// One name or a list of names (fields or tables).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Names {
    Single(String),
    Many(Vec<String>),
}

impl Names {
    /// An empty list; appending it is a no-op.
    pub fn none() -> Self {
        Names::Many(Vec::new())
    }

    /// Append every name onto `target`, keeping what is already there.
    pub(crate) fn append_to(self, target: &mut Vec<String>) {
        match self {
            Names::Single(name) => target.push(name),
            Names::Many(names) => target.extend(names),
        }
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Names::Single(name.to_string())
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Names::Single(name)
    }
}

impl From<&String> for Names {
    fn from(name: &String) -> Self {
        Names::Single(name.clone())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Names::Many(names)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Names::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Names::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Names::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Values of an `IN (...)` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InValues {
    /// Joined with `", "` when rendered.
    List(Vec<String>),
    /// Already joined by the caller, rendered verbatim.
    Literal(String),
}

impl InValues {
    pub(crate) fn joined(&self) -> String {
        match self {
            InValues::List(values) => values.join(", "),
            InValues::Literal(text) => text.clone(),
        }
    }
}

impl From<&str> for InValues {
    fn from(text: &str) -> Self {
        InValues::Literal(text.to_string())
    }
}

impl From<String> for InValues {
    fn from(text: String) -> Self {
        InValues::Literal(text)
    }
}

impl<T: fmt::Display> From<Vec<T>> for InValues {
    fn from(values: Vec<T>) -> Self {
        InValues::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: fmt::Display> From<&[T]> for InValues {
    fn from(values: &[T]) -> Self {
        InValues::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: fmt::Display, const N: usize> From<[T; N]> for InValues {
    fn from(values: [T; N]) -> Self {
        InValues::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// A LIMIT value, kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit(String);

impl Limit {
    pub fn new(value: impl fmt::Display) -> Self {
        Limit(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `""` and `"0"` count as unset and suppress the LIMIT clause.
    pub fn is_truthy(&self) -> bool {
        !(self.0.is_empty() || self.0 == "0")
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyword joining a condition to the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl Joiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Joiner {
    type Err = SqlGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Joiner::And),
            "OR" => Ok(Joiner::Or),
            other => Err(SqlGenError::validation(format!(
                "unknown condition joiner '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_append_preserves_prior_entries() {
        let mut target = vec!["a".to_string()];
        Names::from("b").append_to(&mut target);
        Names::from(["c", "d"]).append_to(&mut target);
        Names::none().append_to(&mut target);
        assert_eq!(target, ["a", "b", "c", "d"]);
    }

    #[test]
    fn in_values_join() {
        assert_eq!(InValues::from([1, 2, 3]).joined(), "1, 2, 3");
        assert_eq!(InValues::from(vec!["'x'", "'y'"]).joined(), "'x', 'y'");
        assert_eq!(InValues::from("1,2").joined(), "1,2");
    }

    #[test]
    fn limit_truthiness() {
        assert!(Limit::new(10).is_truthy());
        assert!(Limit::new("5, 10").is_truthy());
        assert!(!Limit::new(0).is_truthy());
        assert!(!Limit::new("").is_truthy());
    }

    #[test]
    fn joiner_parses_case_insensitively() {
        assert_eq!("or".parse::<Joiner>().unwrap(), Joiner::Or);
        assert_eq!(" And ".parse::<Joiner>().unwrap(), Joiner::And);
        assert!("xor".parse::<Joiner>().unwrap_err().is_validation());
    }
}
