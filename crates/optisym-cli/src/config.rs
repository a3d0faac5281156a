//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use optisym::{OptisymError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for OptisymError {
    fn from(err: ConfigError) -> Self {
        OptisymError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (optisym/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, OptisymError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("optisym/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "optisym", "optisym") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - A style value is out of range
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, OptisymError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    Ok(config)
}

/// Rejects style values the renderer cannot use.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    config
        .style()
        .validate()
        .map_err(|err| ConfigError::Validation(format!("[style] {err}")))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use optisym::draw::{LabelLoc, ParamValue, StrokeCap, StrokeJoin};
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r##"
            seed = 42

            [style]
            line_color = "optical"
            line_width = 1.5
            background_color = "white"
            scale = 48.0
            show_anchors = true
            "##,
        );

        let config = load_config(Some(file.path())).expect("Failed to load config");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.style().scale(), 48.0);
        assert_eq!(config.style().line_width(), 1.5);
        assert!(config.style().show_anchors());
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(Some(file.path())).expect("Failed to load config");

        assert!(config.seed().is_none());
        assert_eq!(config.style().scale(), 64.0);
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_config(Some("definitely/not/here.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("seed = \"not a number\"");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_negative_scale_rejected() {
        let file = write_config("[style]\nscale = -2.0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Validation error"));
        assert!(message.contains("Scale must be positive"));
    }

    #[test]
    fn test_load_default_params() {
        let file = write_config(
            r##"
            [params]
            color = "red"
            label_loc = "bottom"
            zorder = 3
            dashed = true
            opacity = 0.5
            note = "bench"
            "##,
        );

        let config = load_config(Some(file.path())).expect("Failed to load config");
        let params = config.params();
        assert_eq!(params.color(), Some("red"));
        assert_eq!(params.label_loc(), Some(LabelLoc::Bottom));
        assert_eq!(params.extra().get("zorder"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.extra().get("dashed"), Some(&ParamValue::Bool(true)));
        assert_eq!(params.extra().get("opacity"), Some(&ParamValue::Float(0.5)));
        assert_eq!(
            params.extra().get("note"),
            Some(&ParamValue::Text("bench".to_string()))
        );
        assert_eq!(params.extra().len(), 4);
    }

    #[test]
    fn test_load_stroke_style() {
        let file = write_config("[style]\nline_cap = \"butt\"\nline_join = \"miter\"\n");
        let config = load_config(Some(file.path())).expect("Failed to load config");

        assert_eq!(config.style().line_cap(), StrokeCap::Butt);
        assert_eq!(config.style().line_join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_unknown_stroke_cap_rejected() {
        let file = write_config("[style]\nline_cap = \"pointy\"\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
