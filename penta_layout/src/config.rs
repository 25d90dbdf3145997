//! Board configuration read from TOML.
//!
//! ```toml
//! scale = 1000.0
//! shift = false
//!
//! [palette]
//! fields = ["blue", "white", "green", "yellow", "red"]
//! background = "#28292b"
//! foreground = "#d3d3d3"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use penta_board::{Board, Palette};

use crate::builder::{build, BuildOptions};
use crate::error::{LayoutError, Result};

/// Scale used when a configuration does not name one.
pub const DEFAULT_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub scale: f64,
    pub shift: bool,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            shift: false,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            palette: Some(self.palette.clone()),
            shift: self.shift,
        }
    }

    /// Build the configured board.
    pub fn build(&self) -> Result<Board> {
        Ok(build(self.scale, &self.options())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use penta_board::{BoardError, FieldId};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = LayoutConfig::from_toml_str(
            r##"
            scale = 600.0
            shift = true

            [palette]
            fields = ["a", "b", "c", "d", "e"]
            background = "#000000"
            foreground = "#ffffff"
            "##,
        )
        .unwrap();

        assert_eq!(config.scale, 600.0);
        assert!(config.shift);

        let board = config.build().unwrap();
        assert!(board.is_shifted());
        assert_eq!(board.corner(FieldId::new(3).unwrap()).color(), "d");
        assert_eq!(board.sizes().scale, 600.0);
    }

    #[test]
    fn test_non_numeric_scale_rejected() {
        let err = LayoutConfig::from_toml_str(r#"scale = "huge""#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_negative_scale_fails_at_build() {
        let config = LayoutConfig::from_toml_str("scale = -5.0").unwrap();
        assert!(matches!(
            config.build(),
            Err(LayoutError::Board(BoardError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = LayoutConfig::load("/definitely/not/here/board.toml").unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
    }
}
