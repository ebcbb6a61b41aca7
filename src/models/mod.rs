//! Rota domain models.
//!
//! Provides the data types shared by the generator and the history
//! engine.
//!
//! # Domain Mappings
//!
//! | u-rota | Newsroom | Clinic | Support desk |
//! |--------|----------|--------|--------------|
//! | Role | Paper duty | Triage | On-call |
//! | Staff | Editor | Nurse | Engineer |
//! | ShiftAssignment | Weekly editor slot | Weekly triage slot | Weekly pager slot |
//! | ScheduleState | Editorial rota | Clinic rota | On-call rota |

mod assignment;
mod calendar;
mod role;
mod schedule;
mod staff;

pub use assignment::{ShiftAssignment, SlotKey};
pub use calendar::{format_date_with_day, parse_date, week_date, week_dates, DATE_FORMAT};
pub use role::{weekly_demand, Role, ROLE_PALETTE};
pub use schedule::{ScheduleState, SlotColumn};
pub use staff::{parse_staff_names, Staff};
