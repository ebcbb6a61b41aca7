//! Staff (roster member) model.

use serde::{Deserialize, Serialize};

/// A person who can hold duty slots.
///
/// Roster order is insertion order. It only matters for deterministic
/// iteration and for [`TieBreaker::RosterOrder`](crate::generator::TieBreaker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Staff {
    /// Creates a roster member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Splits a comma-separated list of names.
///
/// Names are trimmed and empty entries dropped.
///
/// ```
/// use u_rota::models::parse_staff_names;
///
/// assert_eq!(parse_staff_names(" Ann, Bo ,,Cy "), vec!["Ann", "Bo", "Cy"]);
/// ```
pub fn parse_staff_names(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect()
}
