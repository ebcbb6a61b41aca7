//! Structural checks for rota inputs and snapshots.
//!
//! Nothing here is needed for generation or editing to succeed: both
//! degrade to valid results on their own. These checks let a caller
//! reject a configuration before generating, or confirm that a snapshot
//! still satisfies the slot invariants:
//! - Unique role, staff and assignment IDs
//! - `weeks * sum(required_count)` assignments
//! - Every (week, role, slot) key present exactly once
//! - Every occupant on the roster

use crate::models::{Role, ScheduleState, Staff};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A role needs zero holders per week.
    ZeroRequiredCount,
    /// Assignment count differs from `weeks * sum(required_count)`.
    CardinalityMismatch,
    /// Two assignments share a (week, role, slot) key.
    DuplicateSlot,
    /// An assignment's week or slot index is outside the grid.
    SlotOutOfRange,
    /// An assignment references a role that doesn't exist.
    InvalidRoleReference,
    /// An assignment is held by someone not on the roster.
    InvalidStaffReference,
    /// Number of week dates differs from the horizon.
    WeekDateMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a role list and roster before generation.
///
/// Checks:
/// 1. No duplicate role IDs
/// 2. No duplicate staff IDs
/// 3. Every role needs at least one holder
pub fn validate_config(roles: &[Role], staff: &[Staff]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut role_ids = HashSet::new();
    for r in roles {
        if !role_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", r.id),
            ));
        }
        if r.required_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroRequiredCount,
                format!("Role '{}' requires no holders", r.id),
            ));
        }
    }

    let mut staff_ids = HashSet::new();
    for s in staff {
        if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the slot invariants of a snapshot.
///
/// Checks:
/// 1. One week date per week
/// 2. Assignment count equals `weeks * sum(required_count)`
/// 3. No duplicate assignment IDs
/// 4. Every assignment references an existing role, inside the grid
/// 5. No (week, role, slot) key appears twice
/// 6. Every occupant is on the roster
pub fn validate_schedule(state: &ScheduleState) -> ValidationResult {
    let mut errors = Vec::new();

    if state.week_dates.len() != state.weeks {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeekDateMismatch,
            format!(
                "{} week dates for {} weeks",
                state.week_dates.len(),
                state.weeks
            ),
        ));
    }

    let expected = state.expected_slot_count();
    if state.assignments.len() != expected {
        errors.push(ValidationError::new(
            ValidationErrorKind::CardinalityMismatch,
            format!(
                "Expected {} assignments, found {}",
                expected,
                state.assignments.len()
            ),
        ));
    }

    let role_counts: HashMap<&str, usize> = state
        .roles
        .iter()
        .map(|r| (r.id.as_str(), r.required_count))
        .collect();
    let staff_ids: HashSet<&str> = state.staff.iter().map(|s| s.id.as_str()).collect();

    let mut ids = HashSet::new();
    let mut keys = HashSet::new();

    for a in &state.assignments {
        if !ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }

        match role_counts.get(a.role_id.as_str()) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRoleReference,
                format!(
                    "Assignment '{}' references unknown role '{}'",
                    a.id, a.role_id
                ),
            )),
            Some(&count) => {
                if a.week_index >= state.weeks || a.slot_index >= count {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::SlotOutOfRange,
                        format!(
                            "Assignment '{}' at week {} slot {} is outside the grid",
                            a.id, a.week_index, a.slot_index
                        ),
                    ));
                }
            }
        }

        if !keys.insert(a.key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!(
                    "Slot (week {}, role '{}', slot {}) assigned twice",
                    a.week_index, a.role_id, a.slot_index
                ),
            ));
        }

        if let Some(staff_id) = a.staff_id.as_deref() {
            if !staff_ids.contains(staff_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidStaffReference,
                    format!(
                        "Assignment '{}' is held by unknown staff '{}'",
                        a.id, staff_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Staff members holding more than one slot in the same week.
///
/// Returns `(week_index, staff_id)` pairs sorted by week, then id.
pub fn find_double_bookings(state: &ScheduleState) -> Vec<(usize, &str)> {
    let mut counts: HashMap<(usize, &str), usize> = HashMap::new();
    for a in &state.assignments {
        if let Some(id) = a.staff_id.as_deref() {
            *counts.entry((a.week_index, id)).or_insert(0) += 1;
        }
    }

    let mut doubled: Vec<(usize, &str)> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(key, _)| key)
        .collect();
    doubled.sort_unstable();
    doubled
}
