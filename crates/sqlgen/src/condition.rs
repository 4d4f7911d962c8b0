//! WHERE fragments and the pending-field protocol.

use crate::value::Joiner;

/// Pending-field state between `where_field(..)` and `in_(..)`/`like(..)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Idle,
    Pending(String),
}

impl FieldState {
    /// Stage a field, replacing any previously staged one.
    pub fn stage(&mut self, field: &str) {
        *self = FieldState::Pending(field.to_string());
    }

    /// Take the staged field, leaving the state idle.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            FieldState::Pending(field) => Some(field),
            FieldState::Idle => None,
        }
    }

    pub fn pending(&self) -> Option<&str> {
        match self {
            FieldState::Pending(field) => Some(field),
            FieldState::Idle => None,
        }
    }
}

/// Ordered WHERE fragments.
///
/// The first fragment has no joiner; every later one starts with its own
/// `AND`/`OR`, so rendering is a plain space join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionList {
    fragments: Vec<String>,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<field> <condition>`.
    pub fn push(&mut self, field: &str, condition: &str, joiner: Joiner) {
        self.push_body(&format!("{field} {condition}"), joiner);
    }

    /// Append a raw expression with no field label.
    pub fn push_raw(&mut self, expression: &str, joiner: Joiner) {
        self.push_body(expression, joiner);
    }

    fn push_body(&mut self, body: &str, joiner: Joiner) {
        let fragment = if self.fragments.is_empty() {
            body.to_string()
        } else {
            format!("{joiner} {body}")
        };
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Fragments joined by a single space (without the `WHERE` keyword).
    pub fn joined(&self) -> String {
        self.fragments.join(" ")
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fragment_has_no_joiner() {
        let mut list = ConditionList::new();
        list.push("x", "= 1", Joiner::Or);
        list.push("y", "= 2", Joiner::And);
        list.push("z", "= 3", Joiner::Or);
        assert_eq!(list.fragments(), ["x = 1", "AND y = 2", "OR z = 3"]);
        assert_eq!(list.joined(), "x = 1 AND y = 2 OR z = 3");
    }

    #[test]
    fn raw_fragments_join_the_same_way() {
        let mut list = ConditionList::new();
        list.push_raw("(a = 1 OR b = 2)", Joiner::And);
        list.push_raw("c IS NULL", Joiner::Or);
        assert_eq!(list.joined(), "(a = 1 OR b = 2) OR c IS NULL");
    }

    #[test]
    fn field_state_transitions() {
        let mut state = FieldState::default();
        assert_eq!(state.take(), None);

        state.stage("a");
        state.stage("b");
        assert_eq!(state.pending(), Some("b"));
        assert_eq!(state.take().as_deref(), Some("b"));
        assert_eq!(state, FieldState::Idle);
    }
}
