//! Node consistency (unary pruning).

use tracing::debug;

use super::check_operands;
use crate::constraint::DateConstraint;
use crate::domain::MeetingDomain;
use crate::error::Result;

/// Removes every candidate that violates a unary constraint on its meeting.
///
/// `domains[i]` is the domain of meeting `i`. Binary constraints are
/// ignored. Several unary constraints on one meeting compose: only dates
/// accepted by all of them survive. A single pass suffices because a unary
/// constraint never looks at another meeting's domain.
///
/// Returns the number of removed candidates. Fails with
/// [`InvalidConstraintOperand`](crate::CspError::InvalidConstraintOperand)
/// if a constraint names a meeting without a domain; in that case no
/// domain is modified.
pub fn node_consistency(
    domains: &mut [MeetingDomain],
    constraints: &[DateConstraint],
) -> Result<usize> {
    check_operands(domains.len(), constraints)?;

    let mut removed = 0;
    for unary in constraints.iter().filter_map(DateConstraint::as_unary) {
        let domain = &mut domains[unary.meeting];
        removed += domain.retain(|d| unary.accepts(d));
        if domain.is_empty() {
            debug!(event = "domain_wipeout", meeting = unary.meeting);
        }
    }

    debug!(event = "node_consistency", removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Relation;
    use crate::CspError;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn domains(n: usize) -> Vec<MeetingDomain> {
        vec![MeetingDomain::from_range(day(1), day(10)); n]
    }

    #[test]
    fn test_prunes_only_target_meeting() {
        let mut ds = domains(2);
        let removed =
            node_consistency(&mut ds, &[DateConstraint::unary(1, Relation::Gt, day(7))]).unwrap();
        assert_eq!(removed, 7);
        assert_eq!(ds[0].len(), 10);
        assert_eq!(ds[1].iter().collect::<Vec<_>>(), vec![day(8), day(9), day(10)]);
    }

    #[test]
    fn test_unary_constraints_intersect() {
        let mut ds = domains(1);
        let constraints = [
            DateConstraint::unary(0, Relation::Ge, day(3)),
            DateConstraint::unary(0, Relation::Le, day(6)),
            DateConstraint::unary(0, Relation::Ne, day(4)),
        ];
        node_consistency(&mut ds, &constraints).unwrap();
        assert_eq!(ds[0].iter().collect::<Vec<_>>(), vec![day(3), day(5), day(6)]);
    }

    #[test]
    fn test_ignores_binary_constraints() {
        let mut ds = domains(2);
        let removed =
            node_consistency(&mut ds, &[DateConstraint::binary(0, 1, Relation::Lt)]).unwrap();
        assert_eq!(removed, 0);
        assert!(ds.iter().all(|d| d.len() == 10));
    }

    #[test]
    fn test_wipeout_is_not_an_error() {
        let mut ds = vec![MeetingDomain::from_range(day(1), day(1))];
        node_consistency(&mut ds, &[DateConstraint::unary(0, Relation::Ne, day(1))]).unwrap();
        assert!(ds[0].is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut ds = domains(2);
        let constraints = [
            DateConstraint::unary(0, Relation::Eq, day(4)),
            DateConstraint::unary(1, Relation::Lt, day(4)),
        ];
        assert!(node_consistency(&mut ds, &constraints).unwrap() > 0);
        let snapshot = ds.clone();
        assert_eq!(node_consistency(&mut ds, &constraints).unwrap(), 0);
        assert_eq!(ds, snapshot);
    }

    #[test]
    fn test_rejects_out_of_range_operand() {
        let mut ds = domains(1);
        let constraints = [
            DateConstraint::unary(0, Relation::Eq, day(4)),
            DateConstraint::unary(3, Relation::Eq, day(4)),
        ];
        assert_eq!(
            node_consistency(&mut ds, &constraints),
            Err(CspError::InvalidConstraintOperand {
                index: 3,
                meeting_count: 1
            })
        );
        assert_eq!(ds[0].len(), 10);
    }
}
