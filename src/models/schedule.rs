//! Schedule snapshot model.
//!
//! A [`ScheduleState`] is one immutable rota: the horizon, one date per
//! week, the roles and roster it was generated from, and every slot
//! assignment. Snapshots are the unit stored in
//! [`ScheduleHistory`](crate::history::ScheduleHistory).
//!
//! Roles and staff sit behind [`Arc`], so deriving a snapshot from
//! another only copies the part that changed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{weekly_demand, Role, ShiftAssignment, Staff};

/// A complete rota snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    /// Number of weeks in the horizon.
    pub weeks: usize,
    /// One date per week index.
    pub week_dates: Vec<NaiveDate>,
    /// Roles, in column order.
    pub roles: Arc<Vec<Role>>,
    /// Roster, in insertion order.
    pub staff: Arc<Vec<Staff>>,
    /// Every slot of every role in every week.
    pub assignments: Vec<ShiftAssignment>,
}

/// A grid column: one concurrent slot of one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotColumn<'a> {
    /// Role identifier.
    pub role_id: &'a str,
    /// Role display name.
    pub role_name: &'a str,
    /// Slot index within the role.
    pub slot_index: usize,
}

impl ScheduleState {
    /// Creates a snapshot. The horizon is the number of week dates.
    pub fn new(
        week_dates: Vec<NaiveDate>,
        roles: Vec<Role>,
        staff: Vec<Staff>,
        assignments: Vec<ShiftAssignment>,
    ) -> Self {
        Self {
            weeks: week_dates.len(),
            week_dates,
            roles: Arc::new(roles),
            staff: Arc::new(staff),
            assignments,
        }
    }

    /// Derives a snapshot with a new assignment list, sharing everything else.
    pub fn with_assignments(&self, assignments: Vec<ShiftAssignment>) -> Self {
        Self {
            weeks: self.weeks,
            week_dates: self.week_dates.clone(),
            roles: Arc::clone(&self.roles),
            staff: Arc::clone(&self.staff),
            assignments,
        }
    }

    /// Derives a snapshot with new week dates, sharing everything else.
    pub fn with_week_dates(&self, week_dates: Vec<NaiveDate>) -> Self {
        Self {
            weeks: self.weeks,
            week_dates,
            roles: Arc::clone(&self.roles),
            staff: Arc::clone(&self.staff),
            assignments: self.assignments.clone(),
        }
    }

    /// Finds an assignment by id.
    pub fn assignment(&self, assignment_id: &str) -> Option<&ShiftAssignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    /// Position of an assignment in the list.
    pub fn assignment_position(&self, assignment_id: &str) -> Option<usize> {
        self.assignments.iter().position(|a| a.id == assignment_id)
    }

    /// Finds the assignment at a natural key.
    pub fn assignment_at(
        &self,
        week_index: usize,
        role_id: &str,
        slot_index: usize,
    ) -> Option<&ShiftAssignment> {
        self.assignments.iter().find(|a| {
            a.week_index == week_index && a.role_id == role_id && a.slot_index == slot_index
        })
    }

    /// All assignments in a week.
    pub fn assignments_for_week(&self, week_index: usize) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.week_index == week_index)
            .collect()
    }

    /// All assignments held by a staff member.
    pub fn assignments_for_staff(&self, staff_id: &str) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.is_held_by(staff_id))
            .collect()
    }

    /// Finds a role by id.
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Finds a roster member by id.
    pub fn staff_member(&self, staff_id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == staff_id)
    }

    /// Whether `staff_id` is on the roster.
    pub fn has_staff(&self, staff_id: &str) -> bool {
        self.staff_member(staff_id).is_some()
    }

    /// Display name of a roster member.
    pub fn staff_name(&self, staff_id: &str) -> Option<&str> {
        self.staff_member(staff_id).map(|s| s.name.as_str())
    }

    /// Grid columns: each role's slots, in role order.
    pub fn columns(&self) -> Vec<SlotColumn<'_>> {
        self.roles
            .iter()
            .flat_map(|role| {
                (0..role.required_count).map(move |slot_index| SlotColumn {
                    role_id: &role.id,
                    role_name: &role.name,
                    slot_index,
                })
            })
            .collect()
    }

    /// Date span of the horizon as `first ~ last`.
    ///
    /// Returns `None` if there are no week dates.
    pub fn date_range(&self) -> Option<String> {
        let first = self.week_dates.first()?;
        let last = self.week_dates.last()?;
        Some(format!(
            "{} ~ {}",
            first.format(super::DATE_FORMAT),
            last.format(super::DATE_FORMAT)
        ))
    }

    /// Slot count implied by the horizon and roles.
    pub fn expected_slot_count(&self) -> usize {
        self.weeks * weekly_demand(&self.roles)
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of slots without an occupant.
    pub fn unfilled_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_filled()).count()
    }
}
