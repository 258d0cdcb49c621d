//! Problem definition and solve results.

use chrono::NaiveDate;

use crate::constraint::DateConstraint;
use crate::error::{CspError, Result};
use crate::filter::check_operands;

/// A meeting scheduling problem.
///
/// Meetings are numbered `0..meeting_count` and all share the candidate
/// range `[range_start, range_end]`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_csp::constraint::{DateConstraint, Relation};
/// use u_csp::solver::MeetingProblem;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let problem = MeetingProblem::new(2, start, end)
///     .with_constraint(DateConstraint::binary(0, 1, Relation::Lt));
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingProblem {
    /// Number of meetings.
    pub meeting_count: usize,
    /// First candidate date (inclusive).
    pub range_start: NaiveDate,
    /// Last candidate date (inclusive).
    pub range_end: NaiveDate,
    /// Constraints over the meetings.
    pub constraints: Vec<DateConstraint>,
}

impl MeetingProblem {
    /// Creates a problem without constraints.
    pub fn new(meeting_count: usize, range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            meeting_count,
            range_start,
            range_end,
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: impl Into<DateConstraint>) {
        self.constraints.push(constraint.into());
    }

    /// Builder form of [`MeetingProblem::add_constraint`].
    pub fn with_constraint(mut self, constraint: impl Into<DateConstraint>) -> Self {
        self.add_constraint(constraint);
        self
    }

    /// Appends several constraints.
    pub fn with_constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = DateConstraint>,
    {
        self.constraints.extend(constraints);
        self
    }

    /// Number of dates in the candidate range (0 if the range is inverted).
    pub fn range_len(&self) -> usize {
        let days = (self.range_end - self.range_start).num_days();
        usize::try_from(days + 1).unwrap_or(0)
    }

    /// Checks the range, then every constraint operand.
    pub fn validate(&self) -> Result<()> {
        if self.range_start > self.range_end {
            return Err(CspError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        check_operands(self.meeting_count, &self.constraints)
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveOutcome {
    /// One date per meeting, indexed by meeting. Empty when there are no
    /// meetings.
    Solved(Vec<NaiveDate>),
    /// The search space was exhausted.
    NoSolution,
}

impl SolveOutcome {
    /// Whether a schedule was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// The schedule, if any.
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        match self {
            SolveOutcome::Solved(dates) => Some(dates),
            SolveOutcome::NoSolution => None,
        }
    }

    /// Consumes the outcome, returning the schedule if any.
    pub fn into_dates(self) -> Option<Vec<NaiveDate>> {
        match self {
            SolveOutcome::Solved(dates) => Some(dates),
            SolveOutcome::NoSolution => None,
        }
    }
}

impl From<Option<Vec<NaiveDate>>> for SolveOutcome {
    fn from(dates: Option<Vec<NaiveDate>>) -> Self {
        dates.map_or(SolveOutcome::NoSolution, SolveOutcome::Solved)
    }
}

/// Statistics collected during a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Candidates summed over all domains before filtering.
    pub initial_candidates: usize,
    /// Candidates summed over all domains after filtering.
    pub remaining_candidates: usize,
    /// Candidates removed by node consistency.
    pub node_pruned: usize,
    /// Arcs revised by AC-3.
    pub arc_revisions: usize,
    /// Candidates removed by AC-3.
    pub arc_pruned: usize,
    /// Tentative bindings made by the search.
    pub nodes: usize,
    /// Bindings undone by the search.
    pub backtracks: usize,
    /// Wall-clock time in milliseconds.
    pub solve_time_ms: u64,
}

/// Result of [`CspSolver::solve`](super::CspSolver::solve).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CspResult {
    /// The schedule or [`SolveOutcome::NoSolution`].
    pub outcome: SolveOutcome,
    /// Counters of the run.
    pub stats: SolveStats,
}

impl CspResult {
    /// Whether a schedule was found.
    pub fn is_solution_found(&self) -> bool {
        self.outcome.is_solved()
    }
}
