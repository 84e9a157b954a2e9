//! Command line configuration defaults
//!
//! Values come from built-in defaults, then the environment, then explicit
//! overrides from the caller (normally command line flags).

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Output path environment variable.
pub const ENV_OUTPUT: &str = "SPMX_OUTPUT";
/// Log filter environment variable.
pub const ENV_LOG: &str = "SPMX_LOG";

/// Where results go when no output path is given.
pub const DEFAULT_OUTPUT: &str = "./output/output.txt";
/// Log filter used when neither `SPMX_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "spmx=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Destination of computed results
    pub output_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `SPMX_OUTPUT` and `SPMX_LOG`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(output) = lookup(ENV_OUTPUT) {
            if output.trim().is_empty() {
                return Err(Error::Config(format!("{ENV_OUTPUT} is empty")));
            }
            config.output_path = PathBuf::from(output);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
