//! Comparison operators between two dates.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CspError;

/// A comparison between a left and a right date.
///
/// # Examples
///
/// ```
/// use u_csp::constraint::Relation;
///
/// let rel: Relation = "<=".parse().unwrap();
/// assert_eq!(rel, Relation::Le);
/// assert_eq!(rel.converse(), Relation::Ge);
/// assert_eq!(rel.symbol(), "<=");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// `left == right`
    Eq,
    /// `left != right`
    Ne,
    /// `left < right` (left strictly before right)
    Lt,
    /// `left <= right`
    Le,
    /// `left > right` (left strictly after right)
    Gt,
    /// `left >= right`
    Ge,
}

impl Relation {
    /// Every relation, in declaration order.
    pub const ALL: [Relation; 6] = [
        Relation::Eq,
        Relation::Ne,
        Relation::Lt,
        Relation::Le,
        Relation::Gt,
        Relation::Ge,
    ];

    /// The textual symbol of this relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        }
    }

    /// The relation that holds with the operands swapped.
    ///
    /// `a REL b` holds iff `b REL.converse() a` holds. The converse of the
    /// converse is the relation itself.
    pub fn converse(self) -> Relation {
        match self {
            Relation::Eq => Relation::Eq,
            Relation::Ne => Relation::Ne,
            Relation::Lt => Relation::Gt,
            Relation::Le => Relation::Ge,
            Relation::Gt => Relation::Lt,
            Relation::Ge => Relation::Le,
        }
    }

    /// Whether an ordering of `left` relative to `right` satisfies this relation.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Relation::Eq => ordering == Ordering::Equal,
            Relation::Ne => ordering != Ordering::Equal,
            Relation::Lt => ordering == Ordering::Less,
            Relation::Le => ordering != Ordering::Greater,
            Relation::Gt => ordering == Ordering::Greater,
            Relation::Ge => ordering != Ordering::Less,
        }
    }

    /// Evaluates `left REL right`.
    pub fn holds<T: Ord>(self, left: &T, right: &T) -> bool {
        self.accepts(left.cmp(right))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Relation {
    type Err = CspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" | "=" => Ok(Relation::Eq),
            "!=" => Ok(Relation::Ne),
            "<" => Ok(Relation::Lt),
            "<=" => Ok(Relation::Le),
            ">" => Ok(Relation::Gt),
            ">=" => Ok(Relation::Ge),
            other => Err(CspError::UnknownRelation(other.to_string())),
        }
    }
}
