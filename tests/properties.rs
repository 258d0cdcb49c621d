//! Property tests for the filter-then-search pipeline.

use chrono::NaiveDate;
use proptest::prelude::*;
use u_csp::constraint::{BinaryConstraint, DateConstraint, Relation};
use u_csp::domain::MeetingDomain;
use u_csp::filter::{arc_consistency, node_consistency, ArcIndex};
use u_csp::search::is_consistent;
use u_csp::solver::{CspSolver, MeetingProblem, SolveOutcome, SolverConfig};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn relation() -> impl Strategy<Value = Relation> {
    prop::sample::select(Relation::ALL.to_vec())
}

/// Constraints over `n` meetings whose range is `day(3)..=day(2 + days)`.
/// Reference dates reach two days past either end of the range.
fn constraint(n: usize, days: u32) -> impl Strategy<Value = DateConstraint> {
    prop_oneof![
        (0..n, relation(), 1..=days + 4)
            .prop_map(|(m, rel, d)| DateConstraint::unary(m, rel, day(d))),
        (0..n, 0..n, relation()).prop_map(|(l, r, rel)| DateConstraint::binary(l, r, rel)),
        (0..n, 0..n, relation(), -3i64..=3)
            .prop_map(|(l, r, rel, k)| DateConstraint::gapped(l, r, rel, k)),
    ]
}

fn problem() -> impl Strategy<Value = MeetingProblem> {
    (1usize..=4, 1u32..=6).prop_flat_map(|(n, days)| {
        prop::collection::vec(constraint(n, days), 0..7).prop_map(move |constraints| {
            MeetingProblem::new(n, day(3), day(2 + days)).with_constraints(constraints)
        })
    })
}

fn initial_domains(problem: &MeetingProblem) -> Vec<MeetingDomain> {
    vec![MeetingDomain::from_range(problem.range_start, problem.range_end); problem.meeting_count]
}

/// Exhaustive enumeration of every complete assignment, no pruning.
fn brute_force_has_solution(problem: &MeetingProblem) -> bool {
    let dates: Vec<NaiveDate> = MeetingDomain::from_range(problem.range_start, problem.range_end)
        .iter()
        .collect();
    let n = problem.meeting_count;
    let mut digits = vec![0usize; n];
    loop {
        let assignment: Vec<_> = digits.iter().map(|&i| Some(dates[i])).collect();
        if is_consistent(&assignment, &problem.constraints) {
            return true;
        }
        let mut k = 0;
        loop {
            if k == n {
                return false;
            }
            digits[k] += 1;
            if digits[k] < dates.len() {
                break;
            }
            digits[k] = 0;
            k += 1;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn solver_is_sound_and_complete(problem in problem()) {
        let result = CspSolver::solve(&problem, &SolverConfig::default()).unwrap();
        match &result.outcome {
            SolveOutcome::Solved(dates) => {
                prop_assert_eq!(dates.len(), problem.meeting_count);
                for constraint in &problem.constraints {
                    let left = dates[constraint.left_meeting()];
                    let right = constraint
                        .right_meeting()
                        .map_or(left, |m| dates[m]);
                    prop_assert!(
                        constraint.is_satisfied_by(left, right),
                        "{} violated by {:?}", constraint, dates
                    );
                }
            }
            SolveOutcome::NoSolution => {
                prop_assert!(!brute_force_has_solution(&problem));
            }
        }
    }

    #[test]
    fn filtering_never_changes_the_outcome(problem in problem()) {
        let filtered = CspSolver::solve(&problem, &SolverConfig::default()).unwrap();
        let plain = CspSolver::solve(&problem, &SolverConfig::search_only()).unwrap();
        prop_assert_eq!(filtered.outcome, plain.outcome);
    }

    #[test]
    fn filters_only_shrink_and_are_idempotent(problem in problem()) {
        let initial = initial_domains(&problem);
        let mut domains = initial.clone();
        node_consistency(&mut domains, &problem.constraints).unwrap();
        arc_consistency(&mut domains, &problem.constraints).unwrap();

        for (before, after) in initial.iter().zip(&domains) {
            prop_assert!(after.iter().all(|d| before.contains(d)));
            prop_assert!(after.len() <= before.len());
        }

        let snapshot = domains.clone();
        prop_assert_eq!(node_consistency(&mut domains, &problem.constraints).unwrap(), 0);
        prop_assert_eq!(arc_consistency(&mut domains, &problem.constraints).unwrap().removed, 0);
        prop_assert_eq!(domains, snapshot);
    }

    #[test]
    fn arc_consistency_reaches_fixpoint(problem in problem()) {
        let mut domains = initial_domains(&problem);
        node_consistency(&mut domains, &problem.constraints).unwrap();
        arc_consistency(&mut domains, &problem.constraints).unwrap();

        for arc in ArcIndex::build(&problem.constraints).arcs() {
            for d in domains[arc.tail].iter() {
                prop_assert!(
                    domains[arc.head].iter().any(|e| arc.constraint.is_satisfied_by(d, e)),
                    "{} leaves {} unsupported", arc, d
                );
            }
        }
    }

    #[test]
    fn reverse_is_an_equivalent_involution(
        left in 0usize..4,
        right in 0usize..4,
        rel in relation(),
        offset in -30i64..=30,
        a in 1u32..=28,
        b in 1u32..=28,
    ) {
        let c = BinaryConstraint::with_offset(left, right, rel, offset);
        prop_assert_eq!(c.reverse().reverse(), c);
        prop_assert_eq!(
            c.is_satisfied_by(day(a), day(b)),
            c.reverse().is_satisfied_by(day(b), day(a))
        );
    }
}
