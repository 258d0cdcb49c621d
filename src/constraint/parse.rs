//! Textual constraint notation.
//!
//! | Form | Meaning |
//! |------|---------|
//! | `0 < 2024-05-01` | meeting 0 before the fixed date |
//! | `0 != 1` | meetings 0 and 1 on different dates |
//! | `0 + 3 <= 1` | meeting 0 at least 3 days before meeting 1 |
//! | `0 - 1 == 1` | meeting 0 exactly 1 day after meeting 1 |
//!
//! Tokens are separated by whitespace. [`fmt::Display`] produces the same
//! notation, so printed constraints parse back to equal values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::relation::Relation;
use super::types::{BinaryConstraint, DateConstraint, UnaryConstraint};
use crate::error::CspError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_meeting(token: &str) -> Result<usize, CspError> {
    token
        .parse()
        .map_err(|_| CspError::Parse(format!("expected meeting index, got {token:?}")))
}

impl fmt::Display for UnaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.meeting,
            self.relation,
            self.reference.format(DATE_FORMAT)
        )
    }
}

impl fmt::Display for BinaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset_days {
            0 => write!(f, "{} {} {}", self.left, self.relation, self.right),
            k if k > 0 => write!(f, "{} + {} {} {}", self.left, k, self.relation, self.right),
            k => write!(
                f,
                "{} - {} {} {}",
                self.left,
                k.unsigned_abs(),
                self.relation,
                self.right
            ),
        }
    }
}

impl fmt::Display for DateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateConstraint::Unary(c) => fmt::Display::fmt(c, f),
            DateConstraint::Binary(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for DateConstraint {
    type Err = CspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [left, relation, rhs] => {
                let left = parse_meeting(left)?;
                let relation: Relation = relation.parse()?;
                if let Ok(right) = rhs.parse::<usize>() {
                    return Ok(DateConstraint::binary(left, right, relation));
                }
                let reference = NaiveDate::parse_from_str(rhs, DATE_FORMAT).map_err(|_| {
                    CspError::Parse(format!("expected meeting index or date, got {rhs:?}"))
                })?;
                Ok(DateConstraint::unary(left, relation, reference))
            }
            [left, sign, days, relation, right] => {
                let left = parse_meeting(left)?;
                let count: u64 = days
                    .parse()
                    .map_err(|_| CspError::Parse(format!("expected day count, got {days:?}")))?;
                let offset = match *sign {
                    "+" => i64::try_from(count).ok(),
                    "-" => 0i64.checked_sub_unsigned(count),
                    other => {
                        return Err(CspError::Parse(format!(
                            "expected '+' or '-', got {other:?}"
                        )))
                    }
                }
                .ok_or_else(|| CspError::Parse(format!("day count out of range: {days}")))?;
                let relation: Relation = relation.parse()?;
                let right = parse_meeting(right)?;
                Ok(DateConstraint::gapped(left, right, relation, offset))
            }
            _ => Err(CspError::Parse(format!(
                "expected 3 or 5 tokens, got {}: {s:?}",
                tokens.len()
            ))),
        }
    }
}
