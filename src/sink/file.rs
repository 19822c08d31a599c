use crate::error::{BumpCheckError, Result};
use crate::sink::ResultSink;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Where the sink file path comes from
#[derive(Debug, Clone)]
enum SinkTarget {
    /// Fixed path on disk
    Path(PathBuf),
    /// Path read from this environment variable at append time
    Env(String),
}

/// Result sink appending `key=value` lines to a file.
///
/// The file is created if it does not exist and is only ever appended to.
/// When the target is an environment variable, the variable is read at
/// append time, after validation has already run, so a misconfigured
/// environment never masks a validation diagnostic.
#[derive(Debug, Clone)]
pub struct FileSink {
    target: SinkTarget,
}

impl FileSink {
    /// Create a sink writing to an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        FileSink {
            target: SinkTarget::Path(path.into()),
        }
    }

    /// Create a sink whose file path is named by an environment variable
    /// (e.g. `GITHUB_OUTPUT`)
    pub fn from_env(var_name: impl Into<String>) -> Self {
        FileSink {
            target: SinkTarget::Env(var_name.into()),
        }
    }

    fn resolve_path(&self) -> Result<PathBuf> {
        match &self.target {
            SinkTarget::Path(path) => Ok(path.clone()),
            SinkTarget::Env(var_name) => match env::var(var_name) {
                Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
                _ => Err(BumpCheckError::sink(format!(
                    "environment variable '{}' is not set",
                    var_name
                ))),
            },
        }
    }
}

impl ResultSink for FileSink {
    fn append(&self, key: &str, value: &str) -> Result<()> {
        let path = self.resolve_path()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}={}", key, value)?;
        Ok(())
    }
}
