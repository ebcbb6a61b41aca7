//! Weekly duty rota engine.
//!
//! Assigns a roster to recurring weekly duty slots across an N-week
//! horizon, balancing workload, then lets an operator edit the resulting
//! grid with full undo/redo.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Role`, `Staff`, `ShiftAssignment`,
//!   `ScheduleState`, week date helpers
//! - **`generator`**: Fairness-balancing greedy generator
//! - **`history`**: Snapshot history and the edit operators
//!   (`ReassignSlot`, `SetWeekDate`, `SwapSlots`, `SwapStaff`)
//! - **`stats`**: Per-staff, per-role workload summary
//! - **`session`**: Configuration capture and generation lifecycle
//! - **`validation`**: Input and snapshot integrity checks
//!
//! # Architecture
//!
//! The generator is a pure function of its inputs and knows nothing of
//! the history. The history owns every snapshot; each edit derives a new
//! snapshot and commits it, so no snapshot is ever mutated in place.
//! Nothing in this crate performs I/O; rendering, persistence and export
//! consume `ScheduleState` values.

pub mod error;
pub mod generator;
pub mod history;
pub mod models;
pub mod session;
pub mod stats;
pub mod validation;

pub use error::RotaError;
