//! Arc consistency (AC-3).
//!
//! # Algorithm
//!
//! 1. Build two directed arcs per binary constraint: `left -> right` with the
//!    constraint and `right -> left` with its reverse.
//! 2. Put every arc on a FIFO worklist.
//! 3. Pop an arc `tail -> head` and drop every tail candidate that has no
//!    supporting head candidate.
//! 4. If the tail domain shrank, requeue every arc whose head is that tail.
//! 5. Stop when the worklist is empty.
//!
//! Domains only shrink and only a shrinking domain requeues arcs, so the
//! loop terminates after at most `sum(|D_i|)` productive revisions.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::check_operands;
use crate::constraint::{BinaryConstraint, DateConstraint};
use crate::domain::MeetingDomain;
use crate::error::Result;

/// A directed propagation edge `tail -> head`.
///
/// The constraint is oriented so that its left operand is the tail and its
/// right operand the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    /// Meeting whose domain is revised.
    pub tail: usize,
    /// Meeting whose domain supplies support.
    pub head: usize,
    /// Constraint read as `tail REL head`.
    pub constraint: BinaryConstraint,
}

impl Arc {
    /// The arc `constraint.left -> constraint.right`.
    pub fn new(constraint: BinaryConstraint) -> Self {
        Self {
            tail: constraint.left,
            head: constraint.right,
            constraint,
        }
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.tail, self.head)
    }
}

/// All arcs of a constraint set plus a head-indexed lookup.
///
/// Built once per propagation run and never modified afterwards. Arcs
/// keep the order of the constraints they come from (forward arc first,
/// then the reversed one); duplicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct ArcIndex {
    arcs: Vec<Arc>,
    by_head: HashMap<usize, Vec<usize>>,
}

impl ArcIndex {
    /// Builds the arcs of every binary constraint in `constraints`.
    pub fn build(constraints: &[DateConstraint]) -> Self {
        let mut seen = HashSet::new();
        let mut index = Self::default();
        for binary in constraints.iter().filter_map(DateConstraint::as_binary) {
            for arc in [Arc::new(*binary), Arc::new(binary.reverse())] {
                if seen.insert(arc) {
                    index
                        .by_head
                        .entry(arc.head)
                        .or_default()
                        .push(index.arcs.len());
                    index.arcs.push(arc);
                }
            }
        }
        index
    }

    /// All arcs, in build order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Positions (into [`ArcIndex::arcs`]) of the arcs whose head is `meeting`.
    pub fn incoming(&self, meeting: usize) -> &[usize] {
        self.by_head
            .get(&meeting)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Whether there are no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Counters of an AC-3 run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcConsistencyStats {
    /// Arcs popped from the worklist.
    pub revisions: usize,
    /// Candidates removed across all domains.
    pub removed: usize,
}

/// Makes every binary constraint arc consistent.
///
/// On return, for every arc `tail -> head` each remaining tail candidate
/// has at least one head candidate satisfying the arc's constraint. An
/// emptied domain is a valid outcome; propagation continues so that the
/// wipeout reaches every connected meeting.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_csp::constraint::{DateConstraint, Relation};
/// use u_csp::domain::MeetingDomain;
/// use u_csp::filter::arc_consistency;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let mut domains = vec![MeetingDomain::from_range(start, end); 2];
///
/// // meeting 0 strictly before meeting 1
/// let before = [DateConstraint::binary(0, 1, Relation::Lt)];
/// let stats = arc_consistency(&mut domains, &before).unwrap();
/// assert_eq!(stats.removed, 2);
/// assert!(!domains[0].contains(end));
/// assert!(!domains[1].contains(start));
/// ```
pub fn arc_consistency(
    domains: &mut [MeetingDomain],
    constraints: &[DateConstraint],
) -> Result<ArcConsistencyStats> {
    check_operands(domains.len(), constraints)?;

    let index = ArcIndex::build(constraints);
    let mut queue: VecDeque<usize> = (0..index.len()).collect();
    let mut queued = vec![true; index.len()];
    let mut stats = ArcConsistencyStats::default();

    while let Some(position) = queue.pop_front() {
        queued[position] = false;
        let arc = index.arcs[position];
        stats.revisions += 1;

        let removed = revise(domains, &arc);
        if removed == 0 {
            continue;
        }
        stats.removed += removed;
        if domains[arc.tail].is_empty() {
            debug!(event = "domain_wipeout", meeting = arc.tail);
        }

        for &neighbor in index.incoming(arc.tail) {
            if !queued[neighbor] {
                queued[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        event = "arc_consistency",
        arcs = index.len(),
        revisions = stats.revisions,
        removed = stats.removed,
    );
    Ok(stats)
}

/// Drops tail candidates without support in the head domain.
///
/// Support is computed against the current domains before anything is
/// removed. A self-arc (`tail == head`) can only be supported by the
/// candidate itself.
fn revise(domains: &mut [MeetingDomain], arc: &Arc) -> usize {
    let head = &domains[arc.head];
    let unsupported: Vec<NaiveDate> = domains[arc.tail]
        .iter()
        .filter(|&d| {
            if arc.tail == arc.head {
                !arc.constraint.is_satisfied_by(d, d)
            } else {
                !head.iter().any(|e| arc.constraint.is_satisfied_by(d, e))
            }
        })
        .collect();

    let tail = &mut domains[arc.tail];
    for d in &unsupported {
        tail.remove(*d);
    }

    trace!(
        event = "revise",
        tail = arc.tail,
        head = arc.head,
        removed = unsupported.len(),
    );
    unsupported.len()
}
