//! Solve pipeline.
//!
//! # Algorithm
//!
//! 1. Validate the range and the constraint operands
//! 2. Build one domain per meeting from the shared date range
//! 3. Node consistency (unary constraints)
//! 4. Arc consistency (binary constraints, AC-3)
//! 5. Backtracking search over the filtered domains

use std::time::Instant;

use chrono::NaiveDate;
use tracing::info;

use super::config::SolverConfig;
use super::types::{CspResult, MeetingProblem, SolveOutcome, SolveStats};
use crate::constraint::DateConstraint;
use crate::domain::MeetingDomain;
use crate::error::Result;
use crate::filter::{arc_consistency, node_consistency};
use crate::search::Backtracker;

fn total_candidates(domains: &[MeetingDomain]) -> usize {
    domains.iter().map(MeetingDomain::len).sum()
}

/// Runs the filter-then-search pipeline.
///
/// Every call builds its own domains and assignment; nothing is shared
/// between calls, and the same input always yields the same result.
pub struct CspSolver;

impl CspSolver {
    /// Solves `problem`.
    ///
    /// Fails fast with [`InvalidRange`](crate::CspError::InvalidRange) or
    /// [`InvalidConstraintOperand`](crate::CspError::InvalidConstraintOperand)
    /// before any domain is built. An unsatisfiable problem is not an
    /// error: the result carries [`SolveOutcome::NoSolution`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use u_csp::constraint::{DateConstraint, Relation};
    /// use u_csp::solver::{CspSolver, MeetingProblem, SolverConfig};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
    /// let problem = MeetingProblem::new(2, d(3), d(7))
    ///     .with_constraint(DateConstraint::gapped(0, 1, Relation::Le, 2))
    ///     .with_constraint(DateConstraint::unary(1, Relation::Ne, d(5)));
    ///
    /// let result = CspSolver::solve(&problem, &SolverConfig::default()).unwrap();
    /// assert_eq!(result.outcome.dates(), Some(&[d(3), d(6)][..]));
    /// ```
    pub fn solve(problem: &MeetingProblem, config: &SolverConfig) -> Result<CspResult> {
        problem.validate()?;

        let start_time = Instant::now();
        let constraints = problem.constraints.as_slice();

        info!(
            event = "solve_start",
            meeting_count = problem.meeting_count,
            domain_size = problem.range_len(),
            constraint_count = constraints.len(),
        );

        let mut domains = vec![
            MeetingDomain::from_range(problem.range_start, problem.range_end);
            problem.meeting_count
        ];
        let mut stats = SolveStats {
            initial_candidates: total_candidates(&domains),
            ..SolveStats::default()
        };

        if config.node_consistency {
            stats.node_pruned = node_consistency(&mut domains, constraints)?;
        }
        if config.arc_consistency {
            let arc = arc_consistency(&mut domains, constraints)?;
            stats.arc_revisions = arc.revisions;
            stats.arc_pruned = arc.removed;
        }
        stats.remaining_candidates = total_candidates(&domains);

        let (dates, search) = Backtracker::new(&domains, constraints).run();
        stats.nodes = search.nodes;
        stats.backtracks = search.backtracks;
        stats.solve_time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

        let outcome = SolveOutcome::from(dates);
        info!(
            event = "solve_end",
            solved = outcome.is_solved(),
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            duration_ms = stats.solve_time_ms,
        );

        Ok(CspResult { outcome, stats })
    }
}

/// Schedules `meeting_count` meetings in `[range_start, range_end]` with the
/// default configuration.
///
/// ```
/// use chrono::NaiveDate;
/// use u_csp::constraint::{DateConstraint, Relation};
/// use u_csp::solver::{solve, SolveOutcome};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let outcome = solve(1, d, d, &[DateConstraint::unary(0, Relation::Ne, d)]).unwrap();
/// assert_eq!(outcome, SolveOutcome::NoSolution);
/// ```
pub fn solve(
    meeting_count: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[DateConstraint],
) -> Result<SolveOutcome> {
    let problem = MeetingProblem::new(meeting_count, range_start, range_end)
        .with_constraints(constraints.iter().copied());
    CspSolver::solve(&problem, &SolverConfig::default()).map(|result| result.outcome)
}
