//! Fairness-balancing greedy rota generator.
//!
//! # Algorithm
//!
//! For each week (ascending), each role (list order) and each slot
//! (ascending):
//! 1. Candidate pool = staff not yet used this week. If everyone is
//!    already used, the pool falls back to the whole roster.
//! 2. Rank candidates by role load, then global load (both ascending).
//! 3. Break remaining ties with the configured [`TieBreaker`].
//! 4. Assign the winner and update both counters.
//!
//! With an empty roster every slot is emitted unfilled.
//!
//! # Complexity
//! O(w * d * s) where w=weeks, d=weekly demand, s=roster size.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, trace};

use super::LoadTracker;
use crate::models::{week_dates, weekly_demand, Role, ScheduleState, ShiftAssignment, Staff};

/// How ties between equally-loaded candidates are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Uniform choice among tied candidates (default).
    #[default]
    Random,
    /// First tied candidate in roster order. Fully deterministic.
    RosterOrder,
}

/// Input container for generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Roles, in column order.
    pub roles: Vec<Role>,
    /// Roster.
    pub staff: Vec<Staff>,
    /// Planning horizon in weeks (0 is treated as 1).
    pub weeks: usize,
    /// Date of week 0.
    pub start_date: NaiveDate,
}

impl GenerateRequest {
    /// Creates a generation request.
    pub fn new(roles: Vec<Role>, staff: Vec<Staff>, weeks: usize, start_date: NaiveDate) -> Self {
        Self {
            roles,
            staff,
            weeks,
            start_date,
        }
    }

    /// Sets the start date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the horizon.
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = weeks;
        self
    }
}

/// Output of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Every slot, in (week, role, slot) order.
    pub assignments: Vec<ShiftAssignment>,
    /// One date per week.
    pub week_dates: Vec<NaiveDate>,
}

impl GenerateResult {
    /// Packs the result into a snapshot together with its inputs.
    pub fn into_state(self, roles: Vec<Role>, staff: Vec<Staff>) -> ScheduleState {
        ScheduleState::new(self.week_dates, roles, staff, self.assignments)
    }
}

/// Fairness-balancing greedy generator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_rota::generator::FairnessGenerator;
/// use u_rota::models::{Role, Staff};
///
/// let roles = vec![Role::new("P", "Paper", 1)];
/// let staff = vec![Staff::new("A", "Ann"), Staff::new("B", "Bo"), Staff::new("C", "Cy")];
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let result = FairnessGenerator::new().with_seed(7).generate(&roles, &staff, 3, start);
/// assert_eq!(result.assignments.len(), 3);
/// assert_eq!(result.week_dates.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FairnessGenerator {
    tie_breaker: TieBreaker,
    seed: Option<u64>,
}

impl FairnessGenerator {
    /// Creates a generator with random tie-breaking from the thread RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Seeds random tie-breaking for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a rota.
    ///
    /// Uses the configured seed if any, otherwise the thread RNG.
    pub fn generate(
        &self,
        roles: &[Role],
        staff: &[Staff],
        weeks: usize,
        start_date: NaiveDate,
    ) -> GenerateResult {
        match self.seed {
            Some(seed) => self.generate_with_rng(
                roles,
                staff,
                weeks,
                start_date,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => self.generate_with_rng(roles, staff, weeks, start_date, &mut rand::rng()),
        }
    }

    /// Generates from a request.
    pub fn generate_request(&self, request: &GenerateRequest) -> GenerateResult {
        self.generate(
            &request.roles,
            &request.staff,
            request.weeks,
            request.start_date,
        )
    }

    /// Generates a rota drawing tie-breaks from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        roles: &[Role],
        staff: &[Staff],
        weeks: usize,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> GenerateResult {
        let weeks = weeks.max(1);
        debug!(
            weeks,
            roles = roles.len(),
            staff = staff.len(),
            tie_breaker = ?self.tie_breaker,
            "generating rota"
        );

        let mut loads = LoadTracker::new(staff);
        let mut assignments = Vec::with_capacity(weeks * weekly_demand(roles));

        for week in 0..weeks {
            let mut used: HashSet<&str> = HashSet::new();

            for role in roles {
                for slot in 0..role.required_count {
                    let mut assignment = ShiftAssignment::new(week, role.id.as_str(), slot);

                    if let Some(idx) = self.pick(staff, &used, role, &loads, rng) {
                        let chosen = &staff[idx];
                        trace!(week, role = %role.id, slot, staff = %chosen.id, "slot filled");
                        loads.record(&chosen.id, &role.id);
                        used.insert(&chosen.id);
                        assignment.staff_id = Some(chosen.id.clone());
                    }

                    assignments.push(assignment);
                }
            }
        }

        debug!(assignments = assignments.len(), "rota generated");

        GenerateResult {
            assignments,
            week_dates: week_dates(start_date, weeks),
        }
    }

    /// Returns the roster index of the best candidate for one slot.
    fn pick<R: Rng + ?Sized>(
        &self,
        staff: &[Staff],
        used: &HashSet<&str>,
        role: &Role,
        loads: &LoadTracker<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        let mut pool: Vec<usize> = (0..staff.len())
            .filter(|&i| !used.contains(staff[i].id.as_str()))
            .collect();

        if pool.is_empty() && !staff.is_empty() {
            debug!(role = %role.id, "roster exhausted this week; allowing double booking");
            pool = (0..staff.len()).collect();
        }

        let best = pool
            .iter()
            .map(|&i| loads.rank(&staff[i].id, &role.id))
            .min()?;

        let tied: Vec<usize> = pool
            .into_iter()
            .filter(|&i| loads.rank(&staff[i].id, &role.id) == best)
            .collect();

        match self.tie_breaker {
            TieBreaker::RosterOrder => tied.first().copied(),
            TieBreaker::Random => tied.choose(rng).copied(),
        }
    }
}
