//! Layered configuration for the episode loop.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use showrunner_core::PlaybackTiming;
use showrunner_error::{ConfigError, ShowrunnerError, ShowrunnerResult};
use showrunner_retry::RetryConfig;
use showrunner_source::SourceConfig;
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled defaults.
const DEFAULT_CONFIG: &str = include_str!("../../../showrunner.toml");

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "SHOWRUNNER";

/// Top-level showrunner configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. Bundled defaults (`showrunner.toml` shipped with the crate)
/// 2. `~/.config/showrunner/showrunner.toml`
/// 3. `./showrunner.toml`
/// 4. `SHOWRUNNER_*` environment variables, nested keys joined by `__`
///    (e.g. `SHOWRUNNER_SOURCE__BASE_URL`)
///
/// # Example
///
/// ```no_run
/// use showrunner::ShowrunnerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ShowrunnerConfig::load()?;
/// println!("Fetch retry delay: {:?}", config.retry.fetch_delay_ms());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ShowrunnerConfig {
    /// Where episodes come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Per-step retry delays
    #[serde(default)]
    pub retry: RetryConfig,

    /// Playback pacing
    #[serde(default)]
    pub playback: PlaybackTiming,
}

impl ShowrunnerConfig {
    /// Load configuration from a specific file path.
    ///
    /// Values missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ShowrunnerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    path.as_ref().display().to_string(),
                    format!("Failed to read configuration: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    path.as_ref().display().to_string(),
                    format!("Failed to parse configuration: {}", e),
                ))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    #[instrument]
    pub fn load() -> ShowrunnerResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/showrunner/showrunner.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("showrunner").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    "layered sources",
                    format!("Failed to build configuration: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    "layered sources",
                    format!("Failed to parse configuration: {}", e),
                ))
            })
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Only if the bundled file is broken.
    pub fn bundled() -> ShowrunnerResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                ShowrunnerError::from(ConfigError::new(
                    "bundled defaults",
                    format!("Failed to parse configuration: {}", e),
                ))
            })
    }
}
