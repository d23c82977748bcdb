// Configuration management
//
// Loads and saves the renderer's settings as TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file path
pub const CONFIG_FILE: &str = "pixel_home.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Video configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Window scale (1-4)
    pub scale: u32,

    /// Target FPS
    pub fps: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Window title
    pub title: String,
}

/// Screenshot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Screenshot directory
    pub directory: PathBuf,

    /// Include timestamp in filename
    pub include_timestamp: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default env_logger filter, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            scale: 1,
            fps: 60,
            vsync: true,
            title: "Home".to_string(),
        }
    }
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            directory: PathBuf::from("screenshots"),
            include_timestamp: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

/// How [`AppConfig::load_or_default`] obtained its configuration
#[derive(Debug)]
pub enum LoadOutcome {
    /// Read from the file
    Loaded,
    /// File was missing; defaults were written to it
    CreatedDefault,
    /// File was missing and the defaults could not be written
    DefaultNotWritten(io::Error),
    /// File could not be read or parsed; defaults are used
    Invalid(io::Error),
}

impl LoadOutcome {
    /// Report the outcome through the logger
    pub fn log(&self, path: &Path) {
        match self {
            LoadOutcome::Loaded => log::debug!("Loaded config from {}", path.display()),
            LoadOutcome::CreatedDefault => {
                log::info!("Wrote default config to {}", path.display())
            }
            LoadOutcome::DefaultNotWritten(e) => {
                log::warn!("Could not write default config to {}: {}", path.display(), e)
            }
            LoadOutcome::Invalid(e) => {
                log::warn!("Invalid config {}: {}; using defaults", path.display(), e)
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from file or fall back to defaults
    ///
    /// A missing file is written out with the defaults so it can be edited.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pixel_home::config::AppConfig;
    ///
    /// let (config, outcome) = AppConfig::load_or_default("pixel_home.toml");
    /// outcome.log("pixel_home.toml".as_ref());
    /// ```
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, LoadOutcome) {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => (config, LoadOutcome::Loaded),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                // Try to save the default config, but don't fail if we can't
                let outcome = match config.save(path) {
                    Ok(()) => LoadOutcome::CreatedDefault,
                    Err(e) => LoadOutcome::DefaultNotWritten(e),
                };
                (config, outcome)
            }
            Err(e) => (Self::default(), LoadOutcome::Invalid(e)),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}
