//! Child Profile
//!
//! The single child identity record. `theme_color` is the canonical theme
//! discriminator; older records stored it as `sex`, which the profile
//! repository maps on load.

use serde::{Deserialize, Serialize};

use super::theme::{resolve_theme, Theme, ThemeKind};

pub const DEFAULT_CHILD_NAME: &str = "Child";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub name: String,
    /// Free text, as entered by the parent
    pub age: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
}

impl ChildProfile {
    pub fn new(name: impl Into<String>, age: impl Into<String>, theme_color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            theme_color: theme_color.into(),
        }
    }

    /// Name shown in greetings, "Child" until a parent sets one
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            DEFAULT_CHILD_NAME
        } else {
            name
        }
    }

    pub fn theme_kind(&self) -> ThemeKind {
        ThemeKind::from_discriminator(Some(self.theme_color.as_str()))
    }

    pub fn theme(&self) -> &'static Theme {
        resolve_theme(Some(self.theme_color.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::{GIRL_THEME, NEUTRAL_THEME};

    #[test]
    fn test_display_name_defaults_to_child() {
        assert_eq!(ChildProfile::default().display_name(), "Child");
        assert_eq!(ChildProfile::new("  ", "4", "Boy").display_name(), "Child");
        assert_eq!(ChildProfile::new("Mia", "5", "Girl").display_name(), "Mia");
    }

    #[test]
    fn test_profile_theme() {
        assert_eq!(ChildProfile::new("Mia", "5", "Girl").theme(), &GIRL_THEME);
        assert_eq!(ChildProfile::default().theme(), &NEUTRAL_THEME);
        assert_eq!(ChildProfile::new("Sam", "6", "Boy").theme_kind(), ThemeKind::Boy);
    }

    #[test]
    fn test_profile_json_uses_theme_color_key() {
        let json = serde_json::to_value(ChildProfile::new("Mia", "5", "Girl")).unwrap();
        assert_eq!(json["themeColor"], "Girl");
        assert!(json.get("sex").is_none());
    }
}
