//! Running workload counters for one generation call.

use std::collections::HashMap;

use crate::models::Staff;

/// Ranking key of a candidate for one role. Lower = preferred.
///
/// Compares role load first, then global load.
pub type LoadRank = (usize, usize);

/// Per-call workload counters.
///
/// Tracks how many slots each staff member has received overall and
/// per role. Owned by a single generation call; never shared.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker<'a> {
    global: HashMap<&'a str, usize>,
    by_role: HashMap<(&'a str, &'a str), usize>,
}

impl<'a> LoadTracker<'a> {
    /// Creates counters at zero for every roster member.
    pub fn new(staff: &'a [Staff]) -> Self {
        Self {
            global: staff.iter().map(|s| (s.id.as_str(), 0)).collect(),
            by_role: HashMap::new(),
        }
    }

    /// Total slots assigned to `staff_id`.
    pub fn global(&self, staff_id: &str) -> usize {
        self.global.get(staff_id).copied().unwrap_or(0)
    }

    /// Slots of `role_id` assigned to `staff_id`.
    pub fn role(&self, staff_id: &str, role_id: &str) -> usize {
        self.by_role.get(&(staff_id, role_id)).copied().unwrap_or(0)
    }

    /// Ranking key of `staff_id` for `role_id`.
    #[inline]
    pub fn rank(&self, staff_id: &str, role_id: &str) -> LoadRank {
        (self.role(staff_id, role_id), self.global(staff_id))
    }

    /// Records one slot of `role_id` for `staff_id`.
    pub fn record(&mut self, staff_id: &'a str, role_id: &'a str) {
        *self.global.entry(staff_id).or_insert(0) += 1;
        *self.by_role.entry((staff_id, role_id)).or_insert(0) += 1;
    }
}
