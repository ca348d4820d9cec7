//! Domain types representing transaction categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Fixed set of labels a transaction can be filed under.
///
/// The set is closed; free-form labels go into the transaction description
/// instead. Serialized as the display name so persisted documents stay
/// readable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Rent,
    Salary,
    Utilities,
    Entertainment,
    Transport,
    Health,
    Other,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Rent,
        Category::Salary,
        Category::Utilities,
        Category::Entertainment,
        Category::Transport,
        Category::Health,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Salary => "Salary",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LedgerError::InvalidInput(format!("unknown category `{}`", trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Rent ".parse::<Category>().unwrap(), Category::Rent);
        assert_eq!("UTILITIES".parse::<Category>().unwrap(), Category::Utilities);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "groceries".parse::<Category>().expect_err("unknown label");
        assert!(
            matches!(err, LedgerError::InvalidInput(ref message) if message.contains("groceries")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
    }
}
