//! Configuration schema types for prompt rendering
//!
//! Defines the render settings and their validation rules.

use serde::{Deserialize, Serialize};

use crate::color::{ColorError, HexColor};
use crate::palette::{ColorName, ColorOverrides};
use crate::state::RenderColorState;

fn default_foreground() -> HexColor {
    HexColor::new("#FFFFFF")
}

fn default_background() -> HexColor {
    HexColor::new("#000000")
}

/// Render settings supplied once per render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Palette overrides keyed by canonical color name
    #[serde(default)]
    pub colors: ColorOverrides,
    /// Foreground used when no color code applies
    #[serde(default = "default_foreground")]
    pub foreground: HexColor,
    /// Initial background
    #[serde(default = "default_background")]
    pub background: HexColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            colors: ColorOverrides::new(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "colors.orange")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl Settings {
    /// Validate the settings and return any errors.
    ///
    /// Override values are not checked here; a bad override literal is
    /// reported when a code resolves to it.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let mut keys: Vec<&String> = self.colors.keys().collect();
        keys.sort();
        for key in keys {
            if ColorName::from_name(key).is_none() {
                errors.push(ConfigValidationError {
                    field: format!("colors.{}", key),
                    message: "is not a known color name".to_string(),
                });
            }
        }

        for (field, value) in [("foreground", &self.foreground), ("background", &self.background)]
        {
            if let Err(e) = value.rgb() {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: e.to_string(),
                });
            }
        }

        errors
    }

    /// Build the color state a render starts from.
    pub fn color_state(&self) -> Result<RenderColorState, ColorError> {
        Ok(RenderColorState::new(self.foreground.rgb()?, self.background.rgb()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.colors.is_empty());
        assert!(settings.validate().is_empty());

        let state = settings.color_state().unwrap();
        assert_eq!(state.foreground, Rgb::new(255, 255, 255));
        assert_eq!(state.background, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_validate_unknown_color_name() {
        let mut settings = Settings::default();
        settings.colors.insert("orange".to_string(), HexColor::from("#FFA500"));
        settings.colors.insert("Red".to_string(), HexColor::from("#FF0000"));
        settings.colors.insert("red".to_string(), HexColor::from("#FF0000"));

        let errors = settings.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["colors.Red", "colors.orange"]);
    }

    #[test]
    fn test_validate_does_not_check_override_values() {
        let mut settings = Settings::default();
        settings.colors.insert("red".to_string(), HexColor::from("#FFF"));
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_validate_bad_default_colors() {
        let settings = Settings {
            foreground: HexColor::from("white"),
            background: HexColor::from("#00000"),
            ..Default::default()
        };
        let errors = settings.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "'foreground' invalid hex color 'white'");
        assert_eq!(errors[1].field, "background");
        assert!(settings.color_state().is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let settings: Settings =
            serde_json::from_str(r##"{"colors": {"red": "#FF6B6B"}}"##).unwrap();
        assert_eq!(settings.colors.get("red"), Some(&HexColor::from("#FF6B6B")));
        assert_eq!(settings.foreground, HexColor::from("#FFFFFF"));
        assert_eq!(settings.background, HexColor::from("#000000"));
    }
}
