//! Versioned schedule editing.
//!
//! [`ScheduleHistory`] keeps one full snapshot per edit and a cursor at
//! the present one. Edits are [`Edit`] values: pure transforms from one
//! snapshot to the next, committed only when they apply.
//!
//! | Edit | Changes |
//! |------|---------|
//! | `ReassignSlot` | one assignment's occupant |
//! | `SetWeekDate` | one week's date |
//! | `SwapSlots` | occupants of two assignments |
//! | `SwapStaff` | every slot held by either of two people |
//!
//! Invalid references and history boundaries are silent no-ops, so the
//! present snapshot is always structurally valid.

mod edit;
mod engine;

pub use edit::Edit;
pub use engine::ScheduleHistory;
