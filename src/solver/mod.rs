//! Solver façade.
//!
//! [`CspSolver`] runs domain generation, node consistency, arc consistency
//! and backtracking search in sequence for one [`MeetingProblem`]. The free
//! function [`solve`] is the same pipeline with the default
//! [`SolverConfig`], and [`solve_batch`] handles many problems at once.

mod batch;
mod config;
mod runner;
mod types;

pub use batch::solve_batch;
pub use config::SolverConfig;
pub use runner::{solve, CspSolver};
pub use types::{CspResult, MeetingProblem, SolveOutcome, SolveStats};
