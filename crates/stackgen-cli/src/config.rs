//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the pieces it consumes
//! ([`RequiredVersions`]) and the adapters get their generator settings.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STACKGEN_<SECTION>__<KEY>`,
//!    e.g. `STACKGEN_REQUIREMENTS__NODE=20.0.0`
//! 3. Config file: `--config FILE`, else `config.toml` in the platform
//!    config dir when it exists
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use stackgen_adapters::{BackendSettings, FrontendSettings};
use stackgen_core::domain::RequiredVersions;

const ENV_PREFIX: &str = "STACKGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Minimum tool versions checked before anything is created.
    pub requirements: RequiredVersions,
    /// Vite starter settings.
    pub frontend: FrontendSettings,
    /// Spring Initializr settings.
    pub backend: BackendSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stackgen", "stackgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stackgen.toml"))
    }

    /// Defaults rendered as TOML, for `stackgen init`.
    pub fn default_toml() -> anyhow::Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialise default config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackgen_core::domain::Version;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("stackgen.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_match_component_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.requirements, RequiredVersions::default());
        assert_eq!(cfg.frontend.vite_template, "react-ts");
        assert_eq!(cfg.backend.initializr_url, "https://start.spring.io");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            "[requirements]\nnode = \"20.1\"\n\n[backend]\ngroup_id = \"org.acme\"\n",
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.requirements.node, Version::new([20, 1]));
        assert_eq!(cfg.requirements.java, RequiredVersions::default().java);
        assert_eq!(cfg.backend.group_id, "org.acme");
        assert_eq!(cfg.backend.initializr_url, "https://start.spring.io");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&tmp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn invalid_version_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[requirements]\nnode = \"latest\"\n");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_toml_round_trips_through_load() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, &AppConfig::default_toml().unwrap());
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
