use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for bump-check.
///
/// Controls where the validated result is written without affecting the
/// validation rules themselves.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default environment variable naming the output file.
fn default_output_env_var() -> String {
    "GITHUB_OUTPUT".to_string()
}

/// Returns the default key written in front of the bump kind.
fn default_output_key() -> String {
    "bump_type".to_string()
}

/// Configuration for the result output sink.
///
/// The sink file is resolved from `env_var` unless an explicit output path
/// is given on the command line; `key` is the left-hand side of the single
/// `key=value` line appended on success.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_env_var")]
    pub env_var: String,

    #[serde(default = "default_output_key")]
    pub key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            env_var: default_output_env_var(),
            key: default_output_key(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpcheck.toml` in current directory
/// 3. `.bumpcheck.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumpcheck.toml").exists() {
        fs::read_to_string("./bumpcheck.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumpcheck.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
