use std::fmt;

/// The kind of statement being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
    /// ALTER TABLE skeleton
    AlterTable,
    /// Nothing selected yet
    #[default]
    None,
}

impl Action {
    /// The leading SQL keyword(s), empty for [`Action::None`].
    pub fn keyword(self) -> &'static str {
        match self {
            Action::Select => "SELECT",
            Action::Insert => "INSERT",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::AlterTable => "ALTER TABLE",
            Action::None => "",
        }
    }

    /// Whether a WHERE clause is rendered for this action.
    pub fn accepts_conditions(self) -> bool {
        matches!(self, Action::Select | Action::Update | Action::Delete)
    }

    pub fn is_none(self) -> bool {
        self == Action::None
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => f.write_str("NONE"),
            other => f.write_str(other.keyword()),
        }
    }
}
