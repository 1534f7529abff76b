//! Graph engine configuration.
//!
//! Layered the usual way: compiled-in defaults, then an optional TOML file,
//! then `MATGRAPH_`-prefixed environment variables.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default maximum number of vertices a graph can hold.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for a [`MatrixGraph`](crate::MatrixGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of vertices; fixes the matrix dimensions at construction.
    pub capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Loads configuration from defaults, an optional TOML file, and
    /// `MATGRAPH_`-prefixed environment variables (highest precedence).
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if extraction fails or validation rejects
    /// the resulting values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed("MATGRAPH_"))
            .extract()
            .map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
