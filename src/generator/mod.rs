//! Fairness-balancing rota generation.
//!
//! Produces a complete assignment set from a role list and a roster.
//! Every (week, role, slot) position is emitted exactly once, so the
//! result always holds `weeks * sum(required_count)` assignments.
//!
//! # Fairness
//!
//! Two axes are balanced greedily: how often each person has held the
//! role being filled, then how many slots they hold in total. A person
//! is used at most once per week unless the week's demand exceeds the
//! roster, in which case the whole roster becomes eligible again.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_rota::generator::generate;
//! use u_rota::models::{Role, Staff};
//!
//! let roles = vec![Role::new("P", "Paper", 2)];
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let result = generate(&roles, &[], 3, start);
//! assert_eq!(result.assignments.len(), 6);
//! assert!(result.assignments.iter().all(|a| a.staff_id.is_none()));
//! ```

mod fairness;
mod load;

pub use fairness::{FairnessGenerator, GenerateRequest, GenerateResult, TieBreaker};
pub use load::{LoadRank, LoadTracker};

use chrono::NaiveDate;

use crate::models::{Role, Staff};

/// Generates a rota with random tie-breaking.
///
/// Shorthand for `FairnessGenerator::new().generate(..)`.
pub fn generate(roles: &[Role], staff: &[Staff], weeks: usize, start_date: NaiveDate) -> GenerateResult {
    FairnessGenerator::new().generate(roles, staff, weeks, start_date)
}
