//! Linear snapshot history with undo/redo.

use chrono::NaiveDate;
use tracing::debug;

use super::Edit;
use crate::models::ScheduleState;

/// Linear, branch-truncating history of schedule snapshots.
///
/// Holds every snapshot of the session plus a cursor at the present one.
/// Undo and redo move the cursor; a new edit drops everything after the
/// cursor before appending. The history is the only owner of its
/// snapshots: callers read [`current`](Self::current) and request edits.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_rota::generator::{FairnessGenerator, TieBreaker};
/// use u_rota::history::ScheduleHistory;
/// use u_rota::models::{Role, Staff};
///
/// let roles = vec![Role::new("P", "Paper", 1)];
/// let staff = vec![Staff::new("A", "Ann"), Staff::new("B", "Bo")];
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let result = FairnessGenerator::new()
///     .with_tie_breaker(TieBreaker::RosterOrder)
///     .generate(&roles, &staff, 2, start);
///
/// let mut history = ScheduleHistory::new();
/// history.reset(result.into_state(roles, staff));
///
/// assert!(history.swap_staff_everywhere("A", "B"));
/// assert!(history.can_undo());
/// history.undo();
/// assert!(history.can_redo());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleHistory {
    snapshots: Vec<ScheduleState>,
    cursor: Option<usize>,
    capacity: Option<usize>,
}

impl ScheduleHistory {
    /// Creates an empty history (no schedule yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `capacity` snapshots, dropping the oldest first.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity.max(1));
        self
    }

    /// Replaces the whole history with a single snapshot.
    pub fn reset(&mut self, snapshot: ScheduleState) {
        debug!(assignments = snapshot.assignment_count(), "history reset");
        self.snapshots.clear();
        self.snapshots.push(snapshot);
        self.cursor = Some(0);
    }

    /// Makes `snapshot` the present state.
    ///
    /// Discards any redoable snapshots first. Does nothing and returns
    /// `false` if no schedule exists yet.
    pub fn commit(&mut self, snapshot: ScheduleState) -> bool {
        let Some(cursor) = self.cursor else {
            debug!("commit ignored: no schedule");
            return false;
        };

        self.snapshots.truncate(cursor + 1);
        self.snapshots.push(snapshot);

        if let Some(cap) = self.capacity {
            let excess = self.snapshots.len().saturating_sub(cap);
            self.snapshots.drain(..excess);
        }

        self.cursor = Some(self.snapshots.len() - 1);
        debug!(cursor = self.snapshots.len() - 1, len = self.snapshots.len(), "snapshot committed");
        true
    }

    /// Steps back one snapshot. Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    /// Steps forward one snapshot. Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.snapshots.len() => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    /// The snapshot at the cursor, or `None` before the first reset.
    pub fn current(&self) -> Option<&ScheduleState> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.snapshots.len())
    }

    /// Cursor position. `None` = no schedule.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no schedule has been stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Applies an edit to the current snapshot and commits the result.
    ///
    /// Returns `false`, leaving the history untouched, when there is no
    /// schedule or the edit refers to something that does not exist.
    pub fn apply(&mut self, edit: &Edit) -> bool {
        let Some(current) = self.current() else {
            debug!(edit = edit.name(), "edit ignored: no schedule");
            return false;
        };

        match edit.apply(current) {
            Some(next) => self.commit(next),
            None => {
                debug!(edit = ?edit, "edit ignored: invalid reference");
                false
            }
        }
    }

    /// Sets one slot's occupant (`None` clears it).
    pub fn reassign_slot(&mut self, assignment_id: &str, staff_id: Option<&str>) -> bool {
        self.apply(&Edit::reassign_slot(assignment_id, staff_id))
    }

    /// Moves one week to a new date.
    pub fn set_week_date(&mut self, week_index: usize, date: NaiveDate) -> bool {
        self.apply(&Edit::set_week_date(week_index, date))
    }

    /// Exchanges two slots' occupants.
    pub fn swap_slots(&mut self, first: &str, second: &str) -> bool {
        self.apply(&Edit::swap_slots(first, second))
    }

    /// Exchanges two staff members' entire schedules.
    pub fn swap_staff_everywhere(&mut self, first: &str, second: &str) -> bool {
        self.apply(&Edit::swap_staff(first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FairnessGenerator;
    use crate::models::{Role, ShiftAssignment, Staff};
    use crate::validation::validate_schedule;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state(holders: &[&str]) -> ScheduleState {
        let roles = vec![Role::new("P", "Paper", 1)];
        let staff = vec![
            Staff::new("A", "Ann"),
            Staff::new("B", "Bo"),
            Staff::new("C", "Cy"),
        ];
        let assignments = holders
            .iter()
            .enumerate()
            .map(|(w, h)| ShiftAssignment::new(w, "P", 0).with_staff(*h))
            .collect();
        let dates = (0..holders.len())
            .map(|w| ymd(2024, 1, 1 + 7 * w as u32))
            .collect();
        ScheduleState::new(dates, roles, staff, assignments)
    }

    fn generated() -> ScheduleState {
        let roles = vec![Role::new("P", "Paper", 1), Role::new("R", "Report", 2)];
        let staff: Vec<Staff> = (0..4)
            .map(|i| Staff::new(format!("S{i}"), format!("Staff {i}")))
            .collect();
        FairnessGenerator::new()
            .with_seed(17)
            .generate(&roles, &staff, 5, ymd(2024, 1, 1))
            .into_state(roles, staff)
    }

    #[test]
    fn test_empty_history() {
        let mut h = ScheduleHistory::new();
        assert!(h.current().is_none());
        assert_eq!(h.cursor(), None);
        assert!(h.is_empty());
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(!h.undo());
        assert!(!h.redo());
    }

    #[test]
    fn test_edits_without_schedule_are_noops() {
        let mut h = ScheduleHistory::new();
        assert!(!h.commit(state(&["A"])));
        assert!(!h.swap_slots("w0-s0-P", "w1-s0-P"));
        assert!(!h.set_week_date(0, ymd(2024, 1, 2)));
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn test_reset_replaces_history() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B"]));
        assert!(h.reassign_slot("w0-s0-P", Some("C")));
        assert_eq!(h.len(), 2);

        h.reset(state(&["C"]));
        assert_eq!(h.len(), 1);
        assert_eq!(h.cursor(), Some(0));
        assert_eq!(h.current(), Some(&state(&["C"])));
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_commit_after_undo_discards_redo_branch() {
        let s0 = state(&["A"]);
        let s1 = state(&["B"]);
        let s2 = state(&["C"]);

        let mut h = ScheduleHistory::new();
        h.reset(s0.clone());
        h.commit(s1);
        assert!(h.undo());
        h.commit(s2.clone());

        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), Some(1));
        assert_eq!(h.current(), Some(&s2));
        assert!(!h.redo());
        assert!(h.undo());
        assert_eq!(h.current(), Some(&s0));
    }

    #[test]
    fn test_undo_redo_boundaries() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A"]));
        assert!(!h.undo());
        assert_eq!(h.cursor(), Some(0));

        h.commit(state(&["B"]));
        assert!(!h.redo());
        assert_eq!(h.cursor(), Some(1));
        assert_eq!(h.current(), Some(&state(&["B"])));

        assert!(h.undo());
        assert!(h.can_redo());
        assert!(h.redo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_reassign_and_undo() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B"]));
        assert!(h.reassign_slot("w1-s0-P", None));
        assert_eq!(h.current().unwrap().unfilled_count(), 1);

        h.undo();
        assert_eq!(h.current(), Some(&state(&["A", "B"])));
    }

    #[test]
    fn test_invalid_edits_do_not_commit() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B"]));

        assert!(!h.reassign_slot("missing", Some("A")));
        assert!(!h.reassign_slot("w0-s0-P", Some("Z")));
        assert!(!h.set_week_date(9, ymd(2024, 5, 5)));
        assert!(!h.swap_slots("w0-s0-P", "missing"));
        assert!(!h.swap_staff_everywhere("A", "Z"));

        assert_eq!(h.len(), 1);
        assert_eq!(h.current(), Some(&state(&["A", "B"])));
    }

    #[test]
    fn test_invalid_edit_keeps_redo_branch() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A"]));
        h.reassign_slot("w0-s0-P", Some("B"));
        h.undo();

        assert!(!h.swap_slots("w0-s0-P", "missing"));
        assert!(h.can_redo());
    }

    #[test]
    fn test_set_week_date() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B"]));
        assert!(h.set_week_date(1, ymd(2024, 1, 9)));
        assert_eq!(h.current().unwrap().week_dates[1], ymd(2024, 1, 9));
        assert_eq!(h.current().unwrap().week_dates[0], ymd(2024, 1, 1));
    }

    #[test]
    fn test_swap_slots_twice_restores_occupants() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B", "C"]));
        h.swap_slots("w0-s0-P", "w2-s0-P");
        assert_eq!(h.current().unwrap().assignments[0].staff_id.as_deref(), Some("C"));
        h.swap_slots("w0-s0-P", "w2-s0-P");

        assert_eq!(h.current(), Some(&state(&["A", "B", "C"])));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_swap_staff_everywhere_twice_restores() {
        let original = generated();
        let mut h = ScheduleHistory::new();
        h.reset(original.clone());

        assert!(h.swap_staff_everywhere("S0", "S1"));
        let swapped = h.current().unwrap();
        for (before, after) in original.assignments.iter().zip(&swapped.assignments) {
            let expected = match before.staff_id.as_deref() {
                Some("S0") => Some("S1"),
                Some("S1") => Some("S0"),
                other => other,
            };
            assert_eq!(after.staff_id.as_deref(), expected);
        }

        assert!(h.swap_staff_everywhere("S0", "S1"));
        assert_eq!(h.current(), Some(&original));
    }

    #[test]
    fn test_edits_preserve_schedule_invariants() {
        let mut h = ScheduleHistory::new();
        h.reset(generated());

        let ids: Vec<String> = h
            .current()
            .unwrap()
            .assignments
            .iter()
            .map(|a| a.id.clone())
            .collect();
        h.swap_slots(&ids[0], &ids[7]);
        h.reassign_slot(&ids[3], None);
        h.swap_staff_everywhere("S2", "S3");
        h.set_week_date(4, ymd(2024, 3, 1));
        h.undo();
        h.reassign_slot(&ids[10], Some("S0"));

        let current = h.current().unwrap();
        assert!(validate_schedule(current).is_ok());
        assert_eq!(current.assignment_count(), 5 * 3);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut h = ScheduleHistory::new().with_capacity(2);
        h.reset(state(&["A"]));
        h.commit(state(&["B"]));
        h.commit(state(&["C"]));

        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), Some(1));
        assert!(h.undo());
        assert_eq!(h.current(), Some(&state(&["B"])));
        assert!(!h.undo());
    }

    #[test]
    fn test_snapshots_share_roster() {
        let mut h = ScheduleHistory::new();
        h.reset(state(&["A", "B"]));
        let before = std::sync::Arc::clone(&h.current().unwrap().staff);
        h.swap_staff_everywhere("A", "B");
        assert!(std::sync::Arc::ptr_eq(&before, &h.current().unwrap().staff));
    }
}
