//! Domain filtering.
//!
//! - [`node_consistency`]: prunes each domain against its unary constraints.
//! - [`arc_consistency`]: AC-3 over the binary constraints.
//!
//! Both take the domain list by exclusive reference and only ever remove
//! candidates. Running either a second time on its own output removes
//! nothing.
//!
//! # References
//!
//! Mackworth (1977), "Consistency in Networks of Relations"

mod arc;
mod node;

pub use arc::{arc_consistency, Arc, ArcConsistencyStats, ArcIndex};
pub use node::node_consistency;

use crate::constraint::DateConstraint;
use crate::error::{CspError, Result};

/// Checks that every operand of every constraint is below `meeting_count`.
pub(crate) fn check_operands(meeting_count: usize, constraints: &[DateConstraint]) -> Result<()> {
    for constraint in constraints {
        if let Some(index) = constraint.meetings().find(|&m| m >= meeting_count) {
            return Err(CspError::InvalidConstraintOperand {
                index,
                meeting_count,
            });
        }
    }
    Ok(())
}
