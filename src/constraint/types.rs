//! Unary and binary date constraints.

use chrono::{Datelike, NaiveDate};

use super::relation::Relation;

/// Day ordinal used for gap arithmetic.
fn ordinal(date: NaiveDate) -> i128 {
    i128::from(date.num_days_from_ce())
}

/// Restricts one meeting's date relative to a fixed reference date.
///
/// Satisfied by a candidate `d` iff `d REL reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryConstraint {
    /// Index of the constrained meeting.
    pub meeting: usize,
    /// Relation between the meeting's date and `reference`.
    pub relation: Relation,
    /// Fixed date on the right-hand side.
    pub reference: NaiveDate,
}

impl UnaryConstraint {
    /// Creates a unary constraint `meeting REL reference`.
    pub fn new(meeting: usize, relation: Relation, reference: NaiveDate) -> Self {
        Self {
            meeting,
            relation,
            reference,
        }
    }

    /// Whether `candidate` satisfies the constraint.
    pub fn accepts(&self, candidate: NaiveDate) -> bool {
        self.relation.holds(&candidate, &self.reference)
    }
}

/// Relates the dates of two meetings.
///
/// Satisfied by `(l, r)` iff `(l + offset_days) REL r`. With a zero offset
/// this is the plain relation; `{a, b, Eq, 3}` reads "a is exactly 3 days
/// before b" and `{a, b, Le, 3}` reads "a is at least 3 days before b".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryConstraint {
    /// Meeting on the left of the relation.
    pub left: usize,
    /// Meeting on the right of the relation.
    pub right: usize,
    /// Relation between the shifted left date and the right date.
    pub relation: Relation,
    /// Days added to the left date before comparing. Never `i64::MIN` when
    /// built through [`BinaryConstraint::with_offset`], so it always negates.
    pub offset_days: i64,
}

impl BinaryConstraint {
    /// Creates `left REL right`.
    pub fn new(left: usize, right: usize, relation: Relation) -> Self {
        Self::with_offset(left, right, relation, 0)
    }

    /// Creates `left + offset_days REL right`.
    ///
    /// `i64::MIN` is clamped to `-i64::MAX`; both lie far outside the
    /// representable date span, so satisfaction is unchanged.
    pub fn with_offset(left: usize, right: usize, relation: Relation, offset_days: i64) -> Self {
        Self {
            left,
            right,
            relation,
            offset_days: offset_days.max(-i64::MAX),
        }
    }

    /// Whether the pair of dates satisfies the constraint.
    pub fn is_satisfied_by(&self, left: NaiveDate, right: NaiveDate) -> bool {
        let shifted = ordinal(left) + i128::from(self.offset_days);
        self.relation.holds(&shifted, &ordinal(right))
    }

    /// The equivalent constraint with operands swapped.
    ///
    /// `l + k REL r` is rewritten as `r - k REL' l` where `REL'` is the
    /// converse of `REL`, so `c.reverse().reverse() == c`.
    ///
    /// ```
    /// use u_csp::constraint::{BinaryConstraint, Relation};
    ///
    /// let before = BinaryConstraint::with_offset(0, 1, Relation::Le, 2);
    /// let after = before.reverse();
    /// assert_eq!(after, BinaryConstraint::with_offset(1, 0, Relation::Ge, -2));
    /// assert_eq!(after.reverse(), before);
    /// ```
    pub fn reverse(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            relation: self.relation.converse(),
            offset_days: self.offset_days.saturating_neg(),
        }
    }
}

/// A date constraint of arity one or two.
///
/// Filters dispatch on the variant: node consistency reads only
/// [`DateConstraint::Unary`], arc consistency only [`DateConstraint::Binary`],
/// and the full-assignment check treats both uniformly through
/// [`DateConstraint::is_satisfied_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateConstraint {
    /// Constraint on a single meeting.
    Unary(UnaryConstraint),
    /// Constraint between two meetings.
    Binary(BinaryConstraint),
}

impl DateConstraint {
    /// `meeting REL reference`.
    pub fn unary(meeting: usize, relation: Relation, reference: NaiveDate) -> Self {
        DateConstraint::Unary(UnaryConstraint::new(meeting, relation, reference))
    }

    /// `left REL right`.
    pub fn binary(left: usize, right: usize, relation: Relation) -> Self {
        DateConstraint::Binary(BinaryConstraint::new(left, right, relation))
    }

    /// `left + offset_days REL right`.
    pub fn gapped(left: usize, right: usize, relation: Relation, offset_days: i64) -> Self {
        DateConstraint::Binary(BinaryConstraint::with_offset(
            left,
            right,
            relation,
            offset_days,
        ))
    }

    /// Number of meeting operands (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            DateConstraint::Unary(_) => 1,
            DateConstraint::Binary(_) => 2,
        }
    }

    /// The left operand's meeting index.
    pub fn left_meeting(&self) -> usize {
        match self {
            DateConstraint::Unary(c) => c.meeting,
            DateConstraint::Binary(c) => c.left,
        }
    }

    /// The right operand's meeting index, for binary constraints.
    pub fn right_meeting(&self) -> Option<usize> {
        match self {
            DateConstraint::Unary(_) => None,
            DateConstraint::Binary(c) => Some(c.right),
        }
    }

    /// The fixed right-hand date, for unary constraints.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        match self {
            DateConstraint::Unary(c) => Some(c.reference),
            DateConstraint::Binary(_) => None,
        }
    }

    /// The relation symbol.
    pub fn relation(&self) -> Relation {
        match self {
            DateConstraint::Unary(c) => c.relation,
            DateConstraint::Binary(c) => c.relation,
        }
    }

    /// Iterates over the meeting indices this constraint reads.
    pub fn meetings(&self) -> impl Iterator<Item = usize> {
        std::iter::once(self.left_meeting()).chain(self.right_meeting())
    }

    /// Evaluates the constraint.
    ///
    /// For a binary constraint `left` and `right` are the two meetings'
    /// dates. For a unary constraint `left` is the candidate and `right`
    /// is ignored: the constraint's own reference date is used.
    pub fn is_satisfied_by(&self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            DateConstraint::Unary(c) => c.accepts(left),
            DateConstraint::Binary(c) => c.is_satisfied_by(left, right),
        }
    }

    /// Returns the unary payload, if any.
    pub fn as_unary(&self) -> Option<&UnaryConstraint> {
        match self {
            DateConstraint::Unary(c) => Some(c),
            DateConstraint::Binary(_) => None,
        }
    }

    /// Returns the binary payload, if any.
    pub fn as_binary(&self) -> Option<&BinaryConstraint> {
        match self {
            DateConstraint::Unary(_) => None,
            DateConstraint::Binary(c) => Some(c),
        }
    }
}

impl From<UnaryConstraint> for DateConstraint {
    fn from(c: UnaryConstraint) -> Self {
        DateConstraint::Unary(c)
    }
}

impl From<BinaryConstraint> for DateConstraint {
    fn from(c: BinaryConstraint) -> Self {
        DateConstraint::Binary(c)
    }
}
