use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emit::Framework;
use crate::figma::{ImageExportOptions, ImageFormat, DEFAULT_BASE_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Read(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// React, Vue and HTML components are written and looked up here.
    pub components_dir: PathBuf,
    pub angular_app_dir: PathBuf,
    pub reuse_components: bool,
    pub api_base_url: String,
    pub image: ImageConfig,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub format: ImageFormat,
    pub scale: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from("src/components"),
            angular_app_dir: PathBuf::from("src/app"),
            reuse_components: true,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            image: ImageConfig::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl Config {
    /// `$HOME/.config/figcomp/config.toml`
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("figcomp")
                    .join("config.toml")
            })
    }

    /// Explicit path > central config (if present) > defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::central_config_path().filter(|p| p.is_file()) {
                Some(central) => Self::from_file(&central),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.scale.is_nan() || self.image.scale <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "image.scale",
                message: format!("must be greater than 0 (got {})", self.image.scale),
            });
        }
        if self.components_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "components_dir",
                message: "must not be empty".to_string(),
            });
        }
        if self.angular_app_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "angular_app_dir",
                message: "must not be empty".to_string(),
            });
        }
        if let Err(err) = url::Url::parse(&self.api_base_url) {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                message: err.to_string(),
            });
        }
        if self.timeouts.request.is_zero() {
            return Err(ConfigError::Invalid {
                field: "timeouts.request",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn image_options(&self) -> ImageExportOptions {
        ImageExportOptions {
            scale: self.image.scale,
            format: self.image.format,
        }
    }

    /// Directory below `project_dir` holding components for `framework`.
    pub fn component_root(&self, project_dir: &Path, framework: Framework) -> PathBuf {
        match framework {
            Framework::Angular => project_dir.join(&self.angular_app_dir),
            _ => project_dir.join(&self.components_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert_eq!(cfg.components_dir, PathBuf::from("src/components"));
        assert_eq!(cfg.angular_app_dir, PathBuf::from("src/app"));
        assert!(cfg.reuse_components);
        assert_eq!(cfg.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.image.format, ImageFormat::Png);
        assert!((cfg.image.scale - 1.0).abs() < f32::EPSILON);
        assert_eq!(cfg.timeouts.request, Duration::from_secs(30));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let cfg = Config::from_toml(
            r#"
            components_dir = "app/ui"
            reuse_components = false

            [image]
            format = "svg"

            [timeouts]
            request = "1m 30s"
            "#,
        )
        .expect("parse");

        assert_eq!(cfg.components_dir, PathBuf::from("app/ui"));
        assert!(!cfg.reuse_components);
        assert_eq!(cfg.image.format, ImageFormat::Svg);
        assert!((cfg.image.scale - 1.0).abs() < f32::EPSILON);
        assert_eq!(cfg.timeouts.request, Duration::from_secs(90));
        assert_eq!(cfg.angular_app_dir, PathBuf::from("src/app"));
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "angular_app_dir = \"projects/web/src/app\"").expect("write");

        let cfg = Config::load(Some(file.path())).expect("load");
        assert_eq!(cfg.angular_app_dir, PathBuf::from("projects/web/src/app"));
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/definitely/not/here/figcomp.toml")));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            Config::from_toml("components_dir = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_scale = Config {
            image: ImageConfig {
                scale: 0.0,
                ..ImageConfig::default()
            },
            ..Config::default()
        };
        let empty_dir = Config {
            components_dir: PathBuf::new(),
            ..Config::default()
        };
        let bad_url = Config {
            api_base_url: "not a url".into(),
            ..Config::default()
        };

        for (cfg, field) in [
            (zero_scale, "image.scale"),
            (empty_dir, "components_dir"),
            (bad_url, "api_base_url"),
        ] {
            match cfg.validate() {
                Err(ConfigError::Invalid { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn component_root_depends_on_framework() {
        let cfg = Config::default();
        let project = Path::new("/work/app");
        assert_eq!(
            cfg.component_root(project, Framework::Angular),
            PathBuf::from("/work/app/src/app")
        );
        assert_eq!(
            cfg.component_root(project, Framework::Vue),
            PathBuf::from("/work/app/src/components")
        );
    }
}
