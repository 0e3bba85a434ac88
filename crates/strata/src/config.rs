//! # Streaming Configuration
//!
//! Loaded from TOML. Missing tables and fields take their defaults; numeric
//! values out of range are clamped rather than rejected.
//!
//! ```toml
//! [clipmap]
//! level_count = 4
//! grid_resolution = 64
//!
//! [meshing]
//! mode = "greedy"
//! ```

use std::path::Path;

use serde::Deserialize;
use strata_meshing::MeshingOptions;
use strata_spatial::ClipmapConfig;

use crate::error::{StrataError, StrataResult};

/// Top-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    /// Clipmap index settings.
    pub clipmap: ClipmapConfig,
    /// Mesher settings.
    pub meshing: MeshingOptions,
}

impl StrataConfig {
    /// Parses TOML text. The result is already clamped.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Parse`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> StrataResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.clamped())
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Io`] if the file cannot be read, or
    /// [`StrataError::Parse`] if its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> StrataResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StrataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded streaming config");
        Ok(config)
    }

    /// Returns a copy with every field in range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            clipmap: self.clipmap.clamped(),
            meshing: self.meshing.with_lod_level(self.meshing.lod_level),
        }
    }
}
