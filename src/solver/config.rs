//! Solver configuration.

/// Which filtering passes run before the search.
///
/// Both filters only remove candidates that cannot be part of any
/// solution, so switching them off changes the amount of search, never
/// the outcome.
///
/// # Examples
///
/// ```
/// use u_csp::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_arc_consistency(false);
/// assert!(config.node_consistency);
/// assert!(!config.arc_consistency);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Prune domains with unary constraints.
    pub node_consistency: bool,
    /// Prune domains with AC-3 over binary constraints.
    pub arc_consistency: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            node_consistency: true,
            arc_consistency: true,
        }
    }
}

impl SolverConfig {
    /// Plain backtracking with no filtering.
    pub fn search_only() -> Self {
        Self {
            node_consistency: false,
            arc_consistency: false,
        }
    }

    /// Enables or disables unary pruning before search.
    pub fn with_node_consistency(mut self, enabled: bool) -> Self {
        self.node_consistency = enabled;
        self
    }

    /// Enables or disables AC-3 before search.
    pub fn with_arc_consistency(mut self, enabled: bool) -> Self {
        self.arc_consistency = enabled;
        self
    }
}
