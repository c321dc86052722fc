//! Application configuration.
//!
//! Every field has a default matching the reference test suite, so an absent
//! file or a partial file is always valid input.

use std::path::{Path, PathBuf};
use std::{error::Error, fmt, fs, io};

use serde::Deserialize;

use crate::core::data::colour::Colour;
use crate::core::data::palette::ColourPalette;
use crate::core::patterns::catalog::PatternCatalog;
use crate::core::patterns::recipe::{REFERENCE_CONTRAST_TILE_SIZE, RenderRecipe};

pub const CONFIG_PATH_ENV: &str = "MONITOR_TOOLBOX_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "failed to parse config: {}", err),
            Self::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Frontend Dev Toolbox".to_owned(),
            width: 1024.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorTestConfig {
    pub palette: Vec<Colour>,
    pub contrast_tile_size: u32,
    pub gradient_from: Colour,
    pub gradient_to: Colour,
}

impl Default for MonitorTestConfig {
    fn default() -> Self {
        Self {
            palette: ColourPalette::reference().colours().to_vec(),
            contrast_tile_size: REFERENCE_CONTRAST_TILE_SIZE,
            gradient_from: Colour::BLACK,
            gradient_to: Colour::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub monitor_test: MonitorTestConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    /// Loads from the file named by `MONITOR_TOOLBOX_CONFIG`, or defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor_test.palette.is_empty() {
            return Err(ConfigError::Invalid(
                "monitor_test.palette must contain at least one colour".to_owned(),
            ));
        }

        if self.monitor_test.contrast_tile_size == 0 {
            return Err(ConfigError::Invalid(
                "monitor_test.contrast_tile_size must be greater than zero".to_owned(),
            ));
        }

        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive: {}x{}",
                self.window.width, self.window.height
            )));
        }

        Ok(())
    }

    pub fn catalog(&self) -> Result<PatternCatalog, ConfigError> {
        let palette = ColourPalette::new(self.monitor_test.palette.clone())
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(PatternCatalog::with_recipes(
            palette,
            RenderRecipe::Gradient {
                from: self.monitor_test.gradient_from,
                to: self.monitor_test.gradient_to,
            },
            RenderRecipe::RepeatingContrast {
                tile_size: self.monitor_test.contrast_tile_size,
                dark: Colour::BLACK,
                light: Colour::WHITE,
            },
        ))
    }
}
