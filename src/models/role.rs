//! Role (duty) model.
//!
//! A role is a recurring weekly duty that needs a fixed number of
//! concurrent holders every week of the planning horizon.

use serde::{Deserialize, Serialize};

/// Display palette cycled through by newly added roles.
pub const ROLE_PALETTE: [&str; 8] = [
    "red", "blue", "green", "yellow", "purple", "pink", "indigo", "orange",
];

/// A recurring weekly duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of concurrent slots per week.
    pub required_count: usize,
    /// Display hint. Never interpreted by the scheduler.
    pub color: Option<String>,
}

impl Role {
    /// Creates a role needing `required_count` holders per week.
    pub fn new(id: impl Into<String>, name: impl Into<String>, required_count: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            required_count,
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Palette color for the role at position `index` in a role list.
    pub fn palette_color(index: usize) -> &'static str {
        ROLE_PALETTE[index % ROLE_PALETTE.len()]
    }
}

/// Total concurrent slots per week across all roles.
pub fn weekly_demand(roles: &[Role]) -> usize {
    roles.iter().map(|r| r.required_count).sum()
}
