use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use lbl_solver::SolverConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from the TOML configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Length of generated scrambles.
    pub scramble_length: usize,
    /// Whether to print stickers in color.
    pub color: bool,
    pub solver: SolverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scramble_length: 20,
            color: true,
            solver: SolverConfig::default(),
        }
    }
}

/// `<config dir>/cube/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cube").join("config.toml"))
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(text)
    }

    /// Reads `explicit` if given. Otherwise reads the default path when a
    /// file exists there, and falls back to the defaults when none does.
    pub fn load(explicit: Option<&Path>) -> color_eyre::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_owned(),
            None => match default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("No configuration file found; using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .wrap_err_with(|| format!("Invalid configuration file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let config = Config::from_toml(
            r"
            scramble_length = 25
            color = false

            [solver]
            cross_attempts = 8
            pll_attempts = 2
            ",
        )
        .unwrap();
        assert_eq!(config.scramble_length, 25);
        assert!(!config.color);
        assert_eq!(config.solver.cross_attempts, 8);
        assert_eq!(config.solver.pll_attempts, 2);
        assert_eq!(config.solver.oll_attempts, SolverConfig::default().oll_attempts);
    }

    #[test]
    fn rejects_bad_files() {
        assert!(Config::from_toml("scramble_length = \"long\"").is_err());
        assert!(Config::from_toml("colour = true").is_err());
        assert!(Config::from_toml("[solver]\ncross = 1").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/cube/config.toml");
        assert!(Config::load(Some(missing)).is_err());
    }
}
