//! Error types for the meeting CSP solver.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or solving a meeting problem.
///
/// An exhausted search is not an error: it is reported as
/// [`SolveOutcome::NoSolution`](crate::solver::SolveOutcome::NoSolution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CspError {
    /// The candidate date range is empty because `start > end`.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First date of the range.
        start: NaiveDate,
        /// Last date of the range.
        end: NaiveDate,
    },

    /// A constraint names a meeting index outside `0..meeting_count`.
    #[error("constraint references meeting {index}, but only {meeting_count} meetings exist")]
    InvalidConstraintOperand {
        /// Offending meeting index.
        index: usize,
        /// Number of meetings in the problem.
        meeting_count: usize,
    },

    /// A relation symbol that is not one of `==`, `!=`, `<`, `<=`, `>`, `>=`.
    #[error("unknown relation symbol: {0:?}")]
    UnknownRelation(String),

    /// Malformed textual constraint.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, CspError>;
