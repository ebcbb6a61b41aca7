//! Schedule edits as pure snapshot transforms.
//!
//! Every edit reads one snapshot and derives a new one. Edits never add
//! or remove assignments; they only change occupants or week dates, so
//! slot keys and cardinality survive any sequence of edits.

use chrono::NaiveDate;

use crate::models::ScheduleState;

/// An edit to the current schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Sets the occupant of one slot (`None` clears it).
    ReassignSlot {
        /// Target assignment.
        assignment_id: String,
        /// New occupant.
        staff_id: Option<String>,
    },
    /// Moves one week to a new date.
    SetWeekDate {
        /// Target week.
        week_index: usize,
        /// New date.
        date: NaiveDate,
    },
    /// Exchanges the occupants of two slots.
    SwapSlots {
        /// First assignment.
        first: String,
        /// Second assignment.
        second: String,
    },
    /// Exchanges two staff members' entire schedules.
    SwapStaff {
        /// First staff member.
        first: String,
        /// Second staff member.
        second: String,
    },
}

impl Edit {
    /// Reassigns one slot.
    pub fn reassign_slot(assignment_id: impl Into<String>, staff_id: Option<&str>) -> Self {
        Self::ReassignSlot {
            assignment_id: assignment_id.into(),
            staff_id: staff_id.map(str::to_string),
        }
    }

    /// Changes one week's date.
    pub fn set_week_date(week_index: usize, date: NaiveDate) -> Self {
        Self::SetWeekDate { week_index, date }
    }

    /// Swaps two slots' occupants.
    pub fn swap_slots(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::SwapSlots {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Swaps two staff members everywhere.
    pub fn swap_staff(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::SwapStaff {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Short edit name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReassignSlot { .. } => "reassign_slot",
            Self::SetWeekDate { .. } => "set_week_date",
            Self::SwapSlots { .. } => "swap_slots",
            Self::SwapStaff { .. } => "swap_staff",
        }
    }

    /// Derives the edited snapshot.
    ///
    /// Returns `None` when the edit refers to an unknown assignment,
    /// staff member or week, or names the same slot or person twice.
    pub fn apply(&self, state: &ScheduleState) -> Option<ScheduleState> {
        match self {
            Self::ReassignSlot {
                assignment_id,
                staff_id,
            } => reassign_slot(state, assignment_id, staff_id.as_deref()),
            Self::SetWeekDate { week_index, date } => set_week_date(state, *week_index, *date),
            Self::SwapSlots { first, second } => swap_slots(state, first, second),
            Self::SwapStaff { first, second } => swap_staff(state, first, second),
        }
    }
}

fn reassign_slot(
    state: &ScheduleState,
    assignment_id: &str,
    staff_id: Option<&str>,
) -> Option<ScheduleState> {
    let idx = state.assignment_position(assignment_id)?;
    if let Some(id) = staff_id {
        if !state.has_staff(id) {
            return None;
        }
    }

    let mut assignments = state.assignments.clone();
    assignments[idx].staff_id = staff_id.map(str::to_string);
    Some(state.with_assignments(assignments))
}

fn set_week_date(state: &ScheduleState, week_index: usize, date: NaiveDate) -> Option<ScheduleState> {
    if week_index >= state.week_dates.len() {
        return None;
    }

    let mut week_dates = state.week_dates.clone();
    week_dates[week_index] = date;
    Some(state.with_week_dates(week_dates))
}

fn swap_slots(state: &ScheduleState, first: &str, second: &str) -> Option<ScheduleState> {
    if first == second {
        return None;
    }
    let i = state.assignment_position(first)?;
    let j = state.assignment_position(second)?;

    let mut assignments = state.assignments.clone();
    let held = assignments[i].staff_id.take();
    assignments[i].staff_id = assignments[j].staff_id.take();
    assignments[j].staff_id = held;
    Some(state.with_assignments(assignments))
}

fn swap_staff(state: &ScheduleState, first: &str, second: &str) -> Option<ScheduleState> {
    if first == second || !state.has_staff(first) || !state.has_staff(second) {
        return None;
    }

    // One pass; each slot is matched against its occupant before the edit.
    let assignments = state
        .assignments
        .iter()
        .map(|a| {
            let mut next = a.clone();
            match a.staff_id.as_deref() {
                Some(id) if id == first => next.staff_id = Some(second.to_string()),
                Some(id) if id == second => next.staff_id = Some(first.to_string()),
                _ => {}
            }
            next
        })
        .collect();
    Some(state.with_assignments(assignments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, ShiftAssignment, Staff};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_state() -> ScheduleState {
        let roles = vec![Role::new("P", "Paper", 1), Role::new("R", "Report", 1)];
        let staff = vec![
            Staff::new("A", "Ann"),
            Staff::new("B", "Bo"),
            Staff::new("C", "Cy"),
        ];
        let assignments = vec![
            ShiftAssignment::new(0, "P", 0).with_staff("A"),
            ShiftAssignment::new(0, "R", 0).with_staff("B"),
            ShiftAssignment::new(1, "P", 0).with_staff("B"),
            ShiftAssignment::new(1, "R", 0).with_staff("C"),
        ];
        ScheduleState::new(vec![ymd(2024, 1, 1), ymd(2024, 1, 8)], roles, staff, assignments)
    }

    fn holders(state: &ScheduleState) -> Vec<Option<&str>> {
        state
            .assignments
            .iter()
            .map(|a| a.staff_id.as_deref())
            .collect()
    }

    #[test]
    fn test_reassign_slot() {
        let s = sample_state();
        let next = Edit::reassign_slot("w0-s0-P", Some("C")).apply(&s).unwrap();
        assert_eq!(holders(&next), vec![Some("C"), Some("B"), Some("B"), Some("C")]);
        // Source snapshot is untouched.
        assert_eq!(holders(&s), vec![Some("A"), Some("B"), Some("B"), Some("C")]);
    }

    #[test]
    fn test_reassign_slot_to_unfilled() {
        let s = sample_state();
        let next = Edit::reassign_slot("w1-s0-R", None).apply(&s).unwrap();
        assert_eq!(next.unfilled_count(), 1);
        assert!(next.assignment("w1-s0-R").unwrap().staff_id.is_none());
    }

    #[test]
    fn test_reassign_slot_invalid_references() {
        let s = sample_state();
        assert!(Edit::reassign_slot("missing", Some("A")).apply(&s).is_none());
        assert!(Edit::reassign_slot("w0-s0-P", Some("Z")).apply(&s).is_none());
    }

    #[test]
    fn test_set_week_date() {
        let s = sample_state();
        let next = Edit::set_week_date(1, ymd(2024, 1, 10)).apply(&s).unwrap();
        assert_eq!(next.week_dates, vec![ymd(2024, 1, 1), ymd(2024, 1, 10)]);
        assert_eq!(next.assignments, s.assignments);
        assert!(Edit::set_week_date(2, ymd(2024, 1, 10)).apply(&s).is_none());
    }

    #[test]
    fn test_swap_slots() {
        let s = sample_state();
        let next = Edit::swap_slots("w0-s0-P", "w1-s0-R").apply(&s).unwrap();
        assert_eq!(holders(&next), vec![Some("C"), Some("B"), Some("B"), Some("A")]);
        // Slot identity is preserved.
        assert_eq!(next.assignments[0].key(), s.assignments[0].key());
        assert_eq!(next.assignments[3].id, "w1-s0-R");
    }

    #[test]
    fn test_swap_slots_twice_restores() {
        let s = sample_state();
        let edit = Edit::swap_slots("w0-s0-P", "w0-s0-R");
        let back = edit.apply(&edit.apply(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_swap_slots_with_unfilled() {
        let s = Edit::reassign_slot("w0-s0-P", None).apply(&sample_state()).unwrap();
        let next = Edit::swap_slots("w0-s0-P", "w0-s0-R").apply(&s).unwrap();
        assert_eq!(next.assignments[0].staff_id.as_deref(), Some("B"));
        assert!(next.assignments[1].staff_id.is_none());
    }

    #[test]
    fn test_swap_slots_noops() {
        let s = sample_state();
        assert!(Edit::swap_slots("w0-s0-P", "missing").apply(&s).is_none());
        assert!(Edit::swap_slots("missing", "w0-s0-P").apply(&s).is_none());
        assert!(Edit::swap_slots("w0-s0-P", "w0-s0-P").apply(&s).is_none());
    }

    #[test]
    fn test_swap_staff_single_pass() {
        let s = sample_state();
        let next = Edit::swap_staff("A", "B").apply(&s).unwrap();
        // A's slot goes to B and B's slots go to A; nothing is rewritten twice.
        assert_eq!(holders(&next), vec![Some("B"), Some("A"), Some("A"), Some("C")]);
    }

    #[test]
    fn test_swap_staff_twice_restores() {
        let s = sample_state();
        let edit = Edit::swap_staff("B", "C");
        let back = edit.apply(&edit.apply(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_swap_staff_noops() {
        let s = sample_state();
        assert!(Edit::swap_staff("A", "Z").apply(&s).is_none());
        assert!(Edit::swap_staff("A", "A").apply(&s).is_none());
    }

    #[test]
    fn test_edit_names() {
        assert_eq!(Edit::swap_staff("A", "B").name(), "swap_staff");
        assert_eq!(Edit::set_week_date(0, ymd(2024, 1, 1)).name(), "set_week_date");
    }
}
