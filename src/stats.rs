//! Workload statistics.
//!
//! Summarizes how a rota spreads work across the roster: slots per
//! person per role, totals, and the gap between the busiest and the
//! least busy person.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Role count | Slots of one role held by one person |
//! | Total | All slots held by one person |
//! | Spread | max(total) - min(total) over the roster |
//! | Unfilled | Slots without an occupant |

use serde::Serialize;

use crate::models::ScheduleState;

/// Workload of one roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffWorkload {
    /// Staff identifier.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Slots per role, in the schedule's role order.
    pub by_role: Vec<usize>,
    /// All slots held.
    pub total: usize,
}

/// Workload summary of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadStats {
    /// Role ids, in column order of `StaffWorkload::by_role`.
    pub role_ids: Vec<String>,
    /// One entry per roster member, in roster order.
    pub staff: Vec<StaffWorkload>,
    /// Slots without an occupant.
    pub unfilled: usize,
}

impl WorkloadStats {
    /// Computes workload statistics for a snapshot.
    ///
    /// Slots held by ids missing from the roster are not attributed to
    /// anyone.
    pub fn calculate(state: &ScheduleState) -> Self {
        let role_ids: Vec<String> = state.roles.iter().map(|r| r.id.clone()).collect();

        let staff = state
            .staff
            .iter()
            .map(|member| {
                let by_role: Vec<usize> = role_ids
                    .iter()
                    .map(|role_id| {
                        state
                            .assignments
                            .iter()
                            .filter(|a| a.is_held_by(&member.id) && a.role_id == *role_id)
                            .count()
                    })
                    .collect();
                StaffWorkload {
                    staff_id: member.id.clone(),
                    name: member.name.clone(),
                    total: by_role.iter().sum(),
                    by_role,
                }
            })
            .collect();

        Self {
            role_ids,
            staff,
            unfilled: state.unfilled_count(),
        }
    }

    /// Workload of one staff member.
    pub fn for_staff(&self, staff_id: &str) -> Option<&StaffWorkload> {
        self.staff.iter().find(|w| w.staff_id == staff_id)
    }

    /// Slots of `role_id` held by `staff_id` (0 if either is unknown).
    pub fn role_count(&self, staff_id: &str, role_id: &str) -> usize {
        let Some(col) = self.role_ids.iter().position(|r| r == role_id) else {
            return 0;
        };
        self.for_staff(staff_id)
            .map(|w| w.by_role[col])
            .unwrap_or(0)
    }

    /// Largest total on the roster (0 for an empty roster).
    pub fn max_total(&self) -> usize {
        self.staff.iter().map(|w| w.total).max().unwrap_or(0)
    }

    /// Smallest total on the roster (0 for an empty roster).
    pub fn min_total(&self) -> usize {
        self.staff.iter().map(|w| w.total).min().unwrap_or(0)
    }

    /// Gap between the busiest and least busy person.
    pub fn spread(&self) -> usize {
        self.max_total() - self.min_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FairnessGenerator;
    use crate::models::{Role, ShiftAssignment, Staff};
    use chrono::NaiveDate;

    fn sample_state() -> ScheduleState {
        let roles = vec![Role::new("P", "Paper", 1), Role::new("R", "Report", 2)];
        let staff = vec![
            Staff::new("A", "Ann"),
            Staff::new("B", "Bo"),
            Staff::new("C", "Cy"),
        ];
        let assignments = vec![
            ShiftAssignment::new(0, "P", 0).with_staff("A"),
            ShiftAssignment::new(0, "R", 0).with_staff("A"),
            ShiftAssignment::new(0, "R", 1).with_staff("B"),
            ShiftAssignment::new(1, "P", 0).with_staff("A"),
            ShiftAssignment::new(1, "R", 0),
            ShiftAssignment::new(1, "R", 1).with_staff("ghost"),
        ];
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        ];
        ScheduleState::new(dates, roles, staff, assignments)
    }

    #[test]
    fn test_workload_counts() {
        let stats = WorkloadStats::calculate(&sample_state());
        assert_eq!(stats.role_ids, vec!["P", "R"]);
        assert_eq!(stats.staff.len(), 3);

        let a = stats.for_staff("A").unwrap();
        assert_eq!(a.by_role, vec![2, 1]);
        assert_eq!(a.total, 3);
        assert_eq!(a.name, "Ann");

        assert_eq!(stats.role_count("B", "R"), 1);
        assert_eq!(stats.role_count("C", "P"), 0);
        assert_eq!(stats.role_count("A", "missing"), 0);
        assert_eq!(stats.role_count("missing", "P"), 0);
    }

    #[test]
    fn test_workload_spread_and_unfilled() {
        let stats = WorkloadStats::calculate(&sample_state());
        assert_eq!(stats.max_total(), 3);
        assert_eq!(stats.min_total(), 0);
        assert_eq!(stats.spread(), 3);
        assert_eq!(stats.unfilled, 1);
    }

    #[test]
    fn test_empty_roster() {
        let state = ScheduleState::new(vec![], vec![], vec![], vec![]);
        let stats = WorkloadStats::calculate(&state);
        assert!(stats.staff.is_empty());
        assert_eq!(stats.spread(), 0);
    }

    #[test]
    fn test_generated_rota_is_balanced() {
        let roles = vec![Role::new("P", "Paper", 1), Role::new("R", "Report", 2)];
        let staff: Vec<Staff> = (0..3)
            .map(|i| Staff::new(format!("S{i}"), format!("Staff {i}")))
            .collect();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let state = FairnessGenerator::new()
            .with_seed(2)
            .generate(&roles, &staff, 6, start)
            .into_state(roles, staff);

        let stats = WorkloadStats::calculate(&state);
        assert!(stats.spread() <= 1);
        assert_eq!(stats.unfilled, 0);
        assert_eq!(stats.staff.iter().map(|w| w.total).sum::<usize>(), 18);
    }
}
