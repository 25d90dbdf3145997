//! Board colors.

use serde::{Deserialize, Serialize};

/// Colors used for the five legs plus the board background and foreground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// One color per leg, indexed by leg.
    pub fields: [String; 5],
    pub background: String,
    pub foreground: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fields: ["blue", "white", "green", "yellow", "red"].map(String::from),
            background: "#28292b".to_string(),
            foreground: "#d3d3d3".to_string(),
        }
    }
}

impl Palette {
    /// Color of the given leg, wrapping at five.
    pub fn field_color(&self, leg: u8) -> &str {
        &self.fields[usize::from(leg) % self.fields.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.field_color(0), "blue");
        assert_eq!(palette.field_color(4), "red");
        assert_eq!(palette.background, "#28292b");
    }

    #[test]
    fn test_partial_palette_fills_defaults() {
        let palette: Palette = serde_json::from_str(r#"{"background": "black"}"#).unwrap();
        assert_eq!(palette.background, "black");
        assert_eq!(palette.foreground, "#d3d3d3");
        assert_eq!(palette.field_color(2), "green");
    }

    #[test]
    fn test_field_color_wraps() {
        let palette = Palette::default();
        assert_eq!(palette.field_color(5), "blue");
    }
}
