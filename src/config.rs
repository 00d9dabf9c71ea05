use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub decimation: DecimationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecimationConfig {
    /// Max points kept per report.
    #[serde(default = "default_target_points")]
    pub target_points: usize,
    /// Reject unsorted snapshot input instead of decimating it as-is.
    #[serde(default = "default_validate_order")]
    pub validate_order: bool,
}

impl Default for DecimationConfig {
    fn default() -> Self {
        Self {
            target_points: default_target_points(),
            validate_order: default_validate_order(),
        }
    }
}

fn default_target_points() -> usize {
    240
}

fn default_validate_order() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".into()
}

impl AppConfig {
    /// Loads from `CONFIG_FILE`, else `config.toml`. Defaults apply only when
    /// `CONFIG_FILE` is unset and `config.toml` does not exist.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.decimation.target_points > 0,
            "decimation.target_points must be > 0, got {}",
            self.decimation.target_points
        );
        anyhow::ensure!(
            !self.logging.filter.trim().is_empty(),
            "logging.filter must be non-empty"
        );
        Ok(())
    }
}
