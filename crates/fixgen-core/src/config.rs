use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of messages written to `text.txt`.
pub const DEFAULT_MSG_COUNT: usize = 100;
/// Default number of URLs written to `url.txt`.
pub const DEFAULT_URL_COUNT: usize = 50;
/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("output_dir must not be empty")]
    EmptyOutputDir,
    #[error("locate XDG config dir")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

/// Generator defaults, optionally loaded from `~/.config/fixgen/config.toml`.
/// Command-line flags override any value set here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of messages to generate.
    pub msg_count: usize,
    /// Number of URLs to generate.
    pub url_count: usize,
    /// Draw from all five languages instead of English only.
    pub multilingual: bool,
    /// Directory receiving `text.txt` and `url.txt`.
    pub output_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            msg_count: DEFAULT_MSG_COUNT,
            url_count: DEFAULT_URL_COUNT,
            multilingual: false,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }
        Ok(())
    }
}

/// Existing user config file, if any. Never creates one.
pub fn user_config_path() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fixgen")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load and validate configuration from a TOML file.
pub fn load_from(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: GeneratorConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `explicit` if given, else the user config file if it exists, else defaults.
pub fn load(explicit: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => user_config_path()?,
    };
    match path {
        Some(p) => {
            let cfg = load_from(&p)?;
            tracing::debug!("loaded config from {}", p.display());
            Ok(cfg)
        }
        None => Ok(GeneratorConfig::default()),
    }
}
