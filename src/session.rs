//! Editing session: configuration, generation status and history.
//!
//! [`RotaSession`] is the surface a front end drives. It captures the
//! role list, roster, horizon and start date; refuses to generate from a
//! degenerate configuration; and forwards edits and undo/redo to the
//! [`ScheduleHistory`]. Changing the configuration never touches the
//! current schedule; it only affects the next generation.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RotaError;
use crate::generator::{FairnessGenerator, GenerateRequest, GenerateResult};
use crate::history::{Edit, ScheduleHistory};
use crate::models::{parse_date, parse_staff_names, Role, ScheduleState, Staff};
use crate::stats::WorkloadStats;

/// Default planning horizon in weeks.
pub const DEFAULT_WEEKS: usize = 4;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

/// Lifecycle of the most recent generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Generation in progress.
    Generating,
    /// Last generation produced a schedule.
    Success,
    /// Last generation was refused.
    Error,
}

/// Rota configuration plus the edit history built from it.
#[derive(Debug, Clone)]
pub struct RotaSession {
    roles: Vec<Role>,
    staff: Vec<Staff>,
    weeks: usize,
    start_date: NaiveDate,
    status: GenerationStatus,
    generator: FairnessGenerator,
    history: ScheduleHistory,
}

impl RotaSession {
    /// Creates a session with no roles or staff and a four-week horizon.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            roles: Vec::new(),
            staff: Vec::new(),
            weeks: DEFAULT_WEEKS,
            start_date,
            status: GenerationStatus::Idle,
            generator: FairnessGenerator::new(),
            history: ScheduleHistory::new(),
        }
    }

    /// Sets the role list.
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the roster.
    pub fn with_staff(mut self, staff: Vec<Staff>) -> Self {
        self.staff = staff;
        self
    }

    /// Sets the generator used by [`generate`](Self::generate).
    pub fn with_generator(mut self, generator: FairnessGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Bounds the number of retained snapshots.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = ScheduleHistory::new().with_capacity(capacity);
        self
    }

    // ======================== Configuration ========================

    /// Role list.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Roster.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Horizon in weeks.
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    /// Date of week 0.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Appends a role named `Position {n}` needing one holder.
    ///
    /// Returns the new role's id.
    pub fn add_role(&mut self) -> String {
        let id = self.fresh_id();
        let role = Role::new(id.clone(), format!("Position {}", self.roles.len() + 1), 1)
            .with_color(Role::palette_color(self.roles.len()));
        self.roles.push(role);
        id
    }

    /// Renames a role. Returns whether it exists.
    pub fn rename_role(&mut self, role_id: &str, name: impl Into<String>) -> bool {
        match self.roles.iter_mut().find(|r| r.id == role_id) {
            Some(role) => {
                role.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Sets how many holders a role needs per week (at least one).
    ///
    /// Returns whether the role exists.
    pub fn update_role_count(&mut self, role_id: &str, required_count: usize) -> bool {
        match self.roles.iter_mut().find(|r| r.id == role_id) {
            Some(role) => {
                role.required_count = required_count.max(1);
                true
            }
            None => false,
        }
    }

    /// Removes a role. Returns whether it existed.
    pub fn remove_role(&mut self, role_id: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != role_id);
        self.roles.len() != before
    }

    /// Adds one roster member per comma-separated name.
    ///
    /// Returns how many were added.
    pub fn add_staff_names(&mut self, input: &str) -> usize {
        let names = parse_staff_names(input);
        for name in &names {
            let id = self.fresh_id();
            self.staff.push(Staff::new(id, *name));
        }
        names.len()
    }

    /// Removes a roster member. Returns whether they existed.
    pub fn remove_staff(&mut self, staff_id: &str) -> bool {
        let before = self.staff.len();
        self.staff.retain(|s| s.id != staff_id);
        self.staff.len() != before
    }

    /// Sets the horizon. 0 is treated as 1.
    pub fn set_weeks(&mut self, weeks: usize) {
        self.weeks = weeks.max(1);
    }

    /// Sets the date of week 0.
    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    /// Sets the date of week 0 from a `YYYY-MM-DD` string.
    pub fn set_start_date_str(&mut self, input: &str) -> Result<(), RotaError> {
        self.start_date = parse_date(input)?;
        Ok(())
    }

    // ======================== Generation ========================

    /// Status of the most recent generation request.
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Generates a fresh rota and resets the history to it.
    ///
    /// Refuses an empty roster or role list; the current schedule and
    /// its history are kept in that case.
    pub fn generate(&mut self) -> Result<(), RotaError> {
        let request = self.begin_generation()?;
        let result = self.generator.generate_request(&request);
        self.finish_generation(request, result);
        Ok(())
    }

    /// Starts a generation and marks the session as `Generating`.
    ///
    /// Returns a copy of the configuration for a host to generate from,
    /// for example on a worker thread with [`generator`](Self::generator).
    /// Hand the outcome back through
    /// [`finish_generation`](Self::finish_generation).
    pub fn begin_generation(&mut self) -> Result<GenerateRequest, RotaError> {
        if let Err(e) = self.check_generatable() {
            warn!(error = %e, "generation refused");
            self.status = GenerationStatus::Error;
            return Err(e);
        }

        self.status = GenerationStatus::Generating;
        Ok(GenerateRequest::new(
            self.roles.clone(),
            self.staff.clone(),
            self.weeks,
            self.start_date,
        ))
    }

    /// Completes a generation started with
    /// [`begin_generation`](Self::begin_generation).
    ///
    /// The snapshot uses the roles and roster of `request`, so
    /// configuration edits made while generating apply to the next run.
    pub fn finish_generation(&mut self, request: GenerateRequest, result: GenerateResult) {
        self.history.reset(result.into_state(request.roles, request.staff));
        self.status = GenerationStatus::Success;
        debug!(weeks = request.weeks.max(1), "session schedule generated");
    }

    /// Generator used by [`generate`](Self::generate).
    pub fn generator(&self) -> &FairnessGenerator {
        &self.generator
    }

    fn check_generatable(&self) -> Result<(), RotaError> {
        if self.staff.is_empty() {
            return Err(RotaError::EmptyRoster);
        }
        if self.roles.is_empty() {
            return Err(RotaError::NoRoles);
        }
        Ok(())
    }

    // ======================== Editing ========================

    /// The schedule at the history cursor.
    pub fn current(&self) -> Option<&ScheduleState> {
        self.history.current()
    }

    /// Edit history.
    pub fn history(&self) -> &ScheduleHistory {
        &self.history
    }

    /// Applies an edit. Returns whether it was committed.
    pub fn edit(&mut self, edit: &Edit) -> bool {
        self.history.apply(edit)
    }

    /// Steps back one edit.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps forward one edit.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Whether an undo is possible.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is possible.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Workload statistics of the current schedule.
    pub fn stats(&self) -> Option<WorkloadStats> {
        self.current().map(WorkloadStats::calculate)
    }

    // Short random base-36 id, unique among current roles and staff.
    fn fresh_id(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let id: String = (0..ID_LEN)
                .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
                .collect();
            let taken = self.roles.iter().any(|r| r.id == id) || self.staff.iter().any(|s| s.id == id);
            if !taken {
                return id;
            }
        }
    }
}
