//! Shared color palettes for the drawing scripts.
//!
//! Every diagram takes a [`Palette`] instead of hard-coding colors, so one
//! blog redesign means one palette change. Only `bg` and `fg` are required;
//! unset optionals fall back to derivations at the accessor level.

use serde::{Deserialize, Serialize};

/// Diagram color configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Page/canvas background
    pub bg: String,
    /// Primary text and stroke color
    pub fg: String,
    /// Connector/axis color (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Highlights, arrow heads (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Secondary labels (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    /// Box/shape fill tint (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    pub fn light() -> Self {
        Self {
            bg: "#FFFFFF".to_string(),
            fg: "#333333".to_string(),
            line: Some("#555555".to_string()),
            accent: Some("#C2185B".to_string()),
            muted: Some("#777777".to_string()),
            surface: Some("#F2F0FF".to_string()),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: "#1E1E1E".to_string(),
            fg: "#D4D4D4".to_string(),
            line: Some("#999999".to_string()),
            accent: Some("#FF6E9C".to_string()),
            muted: Some("#8A8A8A".to_string()),
            surface: Some("#2A2A3A".to_string()),
        }
    }

    /// Look up a built-in palette by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    pub fn line(&self) -> &str {
        self.line.as_deref().unwrap_or(&self.fg)
    }

    pub fn accent(&self) -> &str {
        self.accent.as_deref().unwrap_or(&self.fg)
    }

    pub fn muted(&self) -> &str {
        self.muted.as_deref().unwrap_or(&self.fg)
    }

    pub fn surface(&self) -> &str {
        self.surface.as_deref().unwrap_or(&self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_builtins() {
        assert!(Palette::from_name("light").is_some());
        assert!(Palette::from_name("dark").is_some());
        assert!(Palette::from_name("solarized").is_none());
    }

    #[test]
    fn optional_colors_fall_back_to_fg_and_bg() {
        let palette = Palette {
            bg: "#FFF".to_string(),
            fg: "#000".to_string(),
            line: None,
            accent: None,
            muted: None,
            surface: None,
        };
        assert_eq!(palette.line(), "#000");
        assert_eq!(palette.accent(), "#000");
        assert_eq!(palette.surface(), "#FFF");
    }

    #[test]
    fn deserializes_with_missing_optionals() {
        let palette: Palette =
            serde_json::from_str(r##"{"bg": "#101010", "fg": "#FAFAFA", "accent": "#4FC3F7"}"##)
                .unwrap();
        assert_eq!(palette.bg, "#101010");
        assert_eq!(palette.accent(), "#4FC3F7");
        assert_eq!(palette.muted(), "#FAFAFA");
    }
}
