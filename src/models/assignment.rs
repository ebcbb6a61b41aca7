//! Shift assignment model.
//!
//! An assignment is one concurrent holder position of one role in one
//! week. Its natural key is `(week_index, role_id, slot_index)`; the
//! occupant (`staff_id`) is the only field edits ever change.

use serde::{Deserialize, Serialize};

/// Natural key of a duty slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey<'a> {
    /// Week index (0-based).
    pub week_index: usize,
    /// Role identifier.
    pub role_id: &'a str,
    /// Concurrent holder index within the role (0-based).
    pub slot_index: usize,
}

/// One slot of one role in one week, and who holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Week index (0..weeks).
    pub week_index: usize,
    /// Role this slot belongs to.
    pub role_id: String,
    /// Concurrent holder index (0..role.required_count).
    pub slot_index: usize,
    /// Occupant. `None` = unfilled.
    pub staff_id: Option<String>,
}

impl ShiftAssignment {
    /// Creates an unfilled slot with an id derived from its natural key.
    pub fn new(week_index: usize, role_id: impl Into<String>, slot_index: usize) -> Self {
        let role_id = role_id.into();
        Self {
            id: Self::key_id(week_index, &role_id, slot_index),
            week_index,
            role_id,
            slot_index,
            staff_id: None,
        }
    }

    /// Sets the occupant.
    pub fn with_staff(mut self, staff_id: impl Into<String>) -> Self {
        self.staff_id = Some(staff_id.into());
        self
    }

    /// Sets an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Id derived from a natural key: `w{week}-s{slot}-{role_id}`.
    ///
    /// Numeric segments precede the free-form role id, so distinct keys
    /// always yield distinct ids.
    pub fn key_id(week_index: usize, role_id: &str, slot_index: usize) -> String {
        format!("w{week_index}-s{slot_index}-{role_id}")
    }

    /// Natural key of this slot.
    pub fn key(&self) -> SlotKey<'_> {
        SlotKey {
            week_index: self.week_index,
            role_id: &self.role_id,
            slot_index: self.slot_index,
        }
    }

    /// Whether the slot has an occupant.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.staff_id.is_some()
    }

    /// Whether `staff_id` occupies this slot.
    #[inline]
    pub fn is_held_by(&self, staff_id: &str) -> bool {
        self.staff_id.as_deref() == Some(staff_id)
    }
}
