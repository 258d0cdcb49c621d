//! Solving many independent problems.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SolverConfig;
use super::runner::CspSolver;
use super::types::{CspResult, MeetingProblem};
use crate::error::Result;

/// Solves each problem independently, returning results in input order.
///
/// Every problem gets its own domains and assignment. With the `parallel`
/// feature the problems are spread over rayon's thread pool; the search
/// of a single problem always runs on one thread.
pub fn solve_batch(problems: &[MeetingProblem], config: &SolverConfig) -> Vec<Result<CspResult>> {
    #[cfg(feature = "parallel")]
    {
        problems
            .par_iter()
            .map(|problem| CspSolver::solve(problem, config))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        problems
            .iter()
            .map(|problem| CspSolver::solve(problem, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{DateConstraint, Relation};
    use crate::solver::SolveOutcome;
    use crate::CspError;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_results_in_input_order() {
        let problems = vec![
            MeetingProblem::new(2, day(1), day(3))
                .with_constraint(DateConstraint::binary(0, 1, Relation::Gt)),
            MeetingProblem::new(1, day(1), day(1))
                .with_constraint(DateConstraint::unary(0, Relation::Ne, day(1))),
            MeetingProblem::new(1, day(2), day(1)),
            MeetingProblem::new(0, day(1), day(1)),
        ];

        let results = solve_batch(&problems, &SolverConfig::default());
        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap().outcome,
            SolveOutcome::Solved(vec![day(2), day(1)])
        );
        assert_eq!(results[1].as_ref().unwrap().outcome, SolveOutcome::NoSolution);
        assert!(matches!(results[2], Err(CspError::InvalidRange { .. })));
        assert_eq!(results[3].as_ref().unwrap().outcome, SolveOutcome::Solved(vec![]));
    }

    #[test]
    fn test_matches_individual_solves() {
        let problems: Vec<_> = (1..=6)
            .map(|n| {
                let mut problem = MeetingProblem::new(n, day(1), day(10));
                for i in 1..n {
                    problem.add_constraint(DateConstraint::gapped(i - 1, i, Relation::Le, 2));
                }
                problem
            })
            .collect();

        let config = SolverConfig::default();
        let batch = solve_batch(&problems, &config);
        for (problem, result) in problems.iter().zip(batch) {
            let single = CspSolver::solve(problem, &config).unwrap();
            assert_eq!(result.unwrap().outcome, single.outcome);
        }
    }
}
