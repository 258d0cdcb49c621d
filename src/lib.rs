//! Calendar constraint satisfaction.
//!
//! Assigns a date to each of N meetings from a shared candidate range so
//! that every unary constraint (meeting vs. fixed date) and binary
//! constraint (meeting vs. meeting, optionally with a day gap) holds.
//!
//! - **Constraints**: [`constraint::DateConstraint`]: unary or binary,
//!   six relations, fixed-gap variants, textual notation.
//! - **Domains**: [`domain::MeetingDomain`]: candidate dates per meeting.
//! - **Filters**: [`filter::node_consistency`] and
//!   [`filter::arc_consistency`] (AC-3) prune domains before search.
//! - **Search**: [`search::Backtracker`]: chronological backtracking,
//!   first solution wins.
//! - **Solver**: [`solver::CspSolver`] / [`solver::solve`]: the full pipeline.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_csp::constraint::{DateConstraint, Relation};
//! use u_csp::solver::{solve, SolveOutcome};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let constraints = [DateConstraint::binary(0, 1, Relation::Lt)];
//!
//! match solve(2, start, end, &constraints).unwrap() {
//!     SolveOutcome::Solved(dates) => assert!(dates[0] < dates[1]),
//!     SolveOutcome::NoSolution => unreachable!(),
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public data types.
//! - `parallel`: [`solver::solve_batch`] distributes problems over rayon.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! ch. 6 "Constraint Satisfaction Problems"

pub mod constraint;
pub mod domain;
pub mod filter;
pub mod search;
pub mod solver;

mod error;

pub use error::{CspError, Result};
