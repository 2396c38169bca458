//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/coauthor-graph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.coauthor-graph.toml`
//! 4. Environment variables: `COAUTHOR_GRAPH_*`, with `__` separating sections
//!    (e.g. `COAUTHOR_GRAPH_LAYOUT__ITERATIONS=200`)
//!
//! # Example
//!
//! ```toml
//! [layout]
//! width = 1000.0
//! height = 600.0
//! iterations = 100
//! link_distance = 140.0
//! charge_strength = -350.0
//!
//! [extraction]
//! anchor_type = "Researcher"
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::visualization::constants::{
    ALPHA_MIN, CANVAS_HEIGHT, CANVAS_WIDTH, CHARGE_STRENGTH, DISTANCE_MIN, ITERATIONS,
    LINK_DISTANCE, VELOCITY_DECAY,
};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".coauthor-graph.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COAUTHOR_GRAPH_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Force simulation and canvas parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width; the layout is centered at `width / 2`.
    pub width: f64,
    /// Canvas height; the layout is centered at `height / 2`.
    pub height: f64,
    /// Number of simulation ticks. The simulation never stops early.
    pub iterations: usize,
    /// Target separation of linked nodes.
    pub link_distance: f64,
    /// Many-body strength. Negative values repel.
    pub charge_strength: f64,
    /// Fraction of velocity lost per tick (0..1).
    pub velocity_decay: f64,
    /// Alpha value the cooling schedule reaches after 300 ticks.
    pub alpha_min: f64,
    /// Repulsion distance floor, avoids blow-ups for near-coincident nodes.
    pub distance_min: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            iterations: ITERATIONS,
            link_distance: LINK_DISTANCE,
            charge_strength: CHARGE_STRENGTH,
            velocity_decay: VELOCITY_DECAY,
            alpha_min: ALPHA_MIN,
            distance_min: DISTANCE_MIN,
        }
    }
}

impl LayoutConfig {
    /// Reject parameters that would produce silently wrong positions.
    pub fn validate(&self) -> Result<(), AppError> {
        fn positive(parameter: &'static str, value: f64) -> Result<(), AppError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AppError::InvalidLayout {
                    parameter,
                    reason: format!("must be a positive finite number, got {}", value),
                })
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("link_distance", self.link_distance)?;
        positive("distance_min", self.distance_min)?;

        if !self.charge_strength.is_finite() {
            return Err(AppError::InvalidLayout {
                parameter: "charge_strength",
                reason: "must be finite".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.velocity_decay) {
            return Err(AppError::InvalidLayout {
                parameter: "velocity_decay",
                reason: format!("must be in [0, 1), got {}", self.velocity_decay),
            });
        }
        if !(self.alpha_min > 0.0 && self.alpha_min < 1.0) {
            return Err(AppError::InvalidLayout {
                parameter: "alpha_min",
                reason: format!("must be in (0, 1), got {}", self.alpha_min),
            });
        }
        Ok(())
    }
}

/// Neighborhood extraction policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Entity type kept as an anchor when found within two hops.
    pub anchor_type: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            anchor_type: "Researcher".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(&Self::user_config_path(), Path::new(PROJECT_CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the provider stack from explicit file locations.
    pub fn figment(user_config: &Path, project_config: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // Layer 1: User config
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// User config path: ~/.config/coauthor-graph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home
                .join(".config")
                .join("coauthor-graph")
                .join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("coauthor-graph").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config: Config = Config::figment(
            &dir.path().join("missing-user.toml"),
            &dir.path().join("missing-project.toml"),
        )
        .extract()
        .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.layout.iterations, 100);
        assert_eq!(config.layout.link_distance, 140.0);
        assert_eq!(config.layout.charge_strength, -350.0);
        assert_eq!(config.extraction.anchor_type, "Researcher");
    }

    #[test]
    #[serial]
    fn test_project_overrides_user() {
        let dir = tempfile::tempdir().unwrap();
        let user = write_toml(
            &dir,
            "user.toml",
            "[layout]\nwidth = 800.0\niterations = 50\n",
        );
        let project = write_toml(&dir, "project.toml", "[layout]\niterations = 300\n");

        let config: Config = Config::figment(&user, &project).extract().unwrap();
        assert_eq!(config.layout.width, 800.0);
        assert_eq!(config.layout.iterations, 300);
        assert_eq!(config.layout.height, 600.0);
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(&dir, "project.toml", "[layout]\niterations = 300\n");

        std::env::set_var("COAUTHOR_GRAPH_LAYOUT__ITERATIONS", "42");
        std::env::set_var("COAUTHOR_GRAPH_EXTRACTION__ANCHOR_TYPE", "Organization");
        let config: Result<Config, _> =
            Config::figment(&dir.path().join("missing.toml"), &project).extract();
        std::env::remove_var("COAUTHOR_GRAPH_LAYOUT__ITERATIONS");
        std::env::remove_var("COAUTHOR_GRAPH_EXTRACTION__ANCHOR_TYPE");

        let config = config.unwrap();
        assert_eq!(config.layout.iterations, 42);
        assert_eq!(config.extraction.anchor_type, "Organization");
    }

    #[test]
    fn test_validate_rejects_bad_canvas() {
        let config = LayoutConfig {
            width: 0.0,
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidLayout {
                parameter: "width",
                ..
            }
        ));

        let config = LayoutConfig {
            height: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_decay() {
        let config = LayoutConfig {
            velocity_decay: 1.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            alpha_min: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(LayoutConfig::default().validate().is_ok());
    }
}
