use serde::{Deserialize, Serialize};

/// Attempt budgets for the solver phases. Each budget bounds how many
/// algorithm applications one piece (or one last-layer step) may take before
/// the phase gives up and the solver moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub cross_attempts: usize,
    pub f2l_corner_attempts: usize,
    pub f2l_edge_attempts: usize,
    pub oll_attempts: usize,
    pub pll_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cross_attempts: 5,
            f2l_corner_attempts: 7,
            f2l_edge_attempts: 7,
            oll_attempts: 10,
            pll_attempts: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let config = toml::from_str::<SolverConfig>("oll_attempts = 3").unwrap();
        assert_eq!(config.oll_attempts, 3);
        assert_eq!(config.cross_attempts, SolverConfig::default().cross_attempts);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SolverConfig>("oll_tries = 3").is_err());
    }
}
