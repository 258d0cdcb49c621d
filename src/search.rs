//! Backtracking search over filtered domains.
//!
//! Meetings are bound in index order, one per search depth. Each
//! tentative binding is validated against every constraint whose operands
//! are bound ([`is_consistent`]); on a dead end the binding is undone and
//! the next candidate of the same meeting is tried. The first complete
//! assignment found is returned.

use chrono::NaiveDate;
use tracing::trace;

use crate::constraint::DateConstraint;
use crate::domain::MeetingDomain;

/// Whether a partial assignment violates no decidable constraint.
///
/// `assignment[i]` is the date of meeting `i`, or `None` while unbound.
/// A constraint is checked only when all of its operands are bound;
/// otherwise it is skipped, never treated as violated. Operand indices
/// past the end of `assignment` count as unbound. Stops at the first
/// violation.
///
/// ```
/// use chrono::NaiveDate;
/// use u_csp::constraint::{DateConstraint, Relation};
/// use u_csp::search::is_consistent;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let before = [DateConstraint::binary(0, 1, Relation::Lt)];
///
/// assert!(is_consistent(&[Some(d(5)), None], &before));
/// assert!(is_consistent(&[Some(d(1)), Some(d(2))], &before));
/// assert!(!is_consistent(&[Some(d(2)), Some(d(1))], &before));
/// ```
pub fn is_consistent(assignment: &[Option<NaiveDate>], constraints: &[DateConstraint]) -> bool {
    let bound = |meeting: usize| assignment.get(meeting).copied().flatten();

    constraints.iter().all(|constraint| match constraint {
        DateConstraint::Unary(c) => bound(c.meeting).map_or(true, |d| c.accepts(d)),
        DateConstraint::Binary(c) => match (bound(c.left), bound(c.right)) {
            (Some(l), Some(r)) => c.is_satisfied_by(l, r),
            _ => true,
        },
    })
}

/// Counters of a backtracking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Tentative bindings made.
    pub nodes: usize,
    /// Bindings undone, either because they were inconsistent or because
    /// every extension below them failed.
    pub backtracks: usize,
}

/// Depth-first search over a fixed list of domains.
///
/// The domains are only read; the search owns the assignment.
#[derive(Debug)]
pub struct Backtracker<'a> {
    domains: &'a [MeetingDomain],
    constraints: &'a [DateConstraint],
    assignment: Vec<Option<NaiveDate>>,
    stats: SearchStats,
}

impl<'a> Backtracker<'a> {
    /// Prepares a search with one unbound slot per domain.
    pub fn new(domains: &'a [MeetingDomain], constraints: &'a [DateConstraint]) -> Self {
        Self {
            domains,
            constraints,
            assignment: vec![None; domains.len()],
            stats: SearchStats::default(),
        }
    }

    /// Runs the search.
    ///
    /// Returns the first complete consistent assignment in domain order,
    /// or `None` if the search space is exhausted. With no domains the
    /// empty assignment is a solution.
    pub fn run(mut self) -> (Option<Vec<NaiveDate>>, SearchStats) {
        let solution = if self.extend(0) {
            self.assignment.iter().copied().collect::<Option<Vec<_>>>()
        } else {
            None
        };
        (solution, self.stats)
    }

    /// Binds meeting `index` and everything after it.
    ///
    /// Depth-first over an explicit cursor stack, so stack usage does not
    /// grow with the number of meetings. `cursors[i]` is the last candidate
    /// tried for meeting `index + i`.
    ///
    /// Postcondition: on `true` every slot is bound; on `false` every slot
    /// `>= index` is unbound and slots `< index` are untouched.
    fn extend(&mut self, index: usize) -> bool {
        let domains = self.domains;
        let mut cursors: Vec<Option<NaiveDate>> = Vec::new();

        loop {
            if index + cursors.len() == domains.len() {
                return true;
            }
            cursors.push(None);

            // advance the deepest frame until a consistent binding is found
            loop {
                let Some(frame) = cursors.len().checked_sub(1) else {
                    return false;
                };
                let meeting = index + frame;
                let next = match cursors[frame] {
                    Some(last) => domains[meeting].next_after(last),
                    None => domains[meeting].first(),
                };

                match next {
                    Some(candidate) => {
                        cursors[frame] = Some(candidate);
                        self.stats.nodes += 1;
                        self.assignment[meeting] = Some(candidate);
                        if is_consistent(&self.assignment, self.constraints) {
                            break;
                        }
                        self.assignment[meeting] = None;
                        self.stats.backtracks += 1;
                    }
                    None => {
                        trace!(event = "dead_end", meeting);
                        cursors.pop();
                        if let Some(parent) = cursors.len().checked_sub(1) {
                            self.assignment[index + parent] = None;
                            self.stats.backtracks += 1;
                        }
                    }
                }
            }
        }
    }
}
