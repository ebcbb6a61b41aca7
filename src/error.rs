//! Boundary error types.
//!
//! Scheduling and editing never fail: degenerate inputs yield valid
//! results and invalid references are no-ops. These errors only cover
//! the edges where raw input enters the crate.

use thiserror::Error;

/// Errors raised at the input boundary.
#[derive(Debug, Error, PartialEq)]
pub enum RotaError {
    /// A date string was not `YYYY-MM-DD`.
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Parser error.
        #[source]
        source: chrono::ParseError,
    },

    /// Generation was requested with an empty roster.
    #[error("cannot generate a rota without staff")]
    EmptyRoster,

    /// Generation was requested without any roles.
    #[error("cannot generate a rota without roles")]
    NoRoles,
}
