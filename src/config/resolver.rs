//! Resolver settings.

use serde::Deserialize;

use crate::encoding::{Codec, DEFAULT_ENCODING};
use crate::error::ConfigError;

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

/// Settings for [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolverConfig {
    /// Encoding assumed when no declaration is found.
    #[serde(default = "default_encoding")]
    pub default_encoding: String,
    /// Overrides the locale-preferred fallback encoding.
    #[serde(default)]
    pub fallback_encoding: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_encoding: default_encoding(),
            fallback_encoding: None,
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default encoding.
    pub fn with_default_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.default_encoding = encoding.into();
        self
    }

    /// Use a fixed fallback encoding instead of querying the locale.
    pub fn with_fallback_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.fallback_encoding = Some(encoding.into());
        self
    }

    /// Check that every configured encoding name is known.
    ///
    /// Declared encodings are only checked at resolution time; configured ones
    /// are checked up front since they apply to every source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let configured =
            std::iter::once(&self.default_encoding).chain(self.fallback_encoding.as_ref());
        for name in configured {
            if Codec::for_name(name).is_none() {
                return Err(ConfigError::UnknownEncoding(name.clone()));
            }
        }
        Ok(())
    }
}
