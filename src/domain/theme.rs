//! Child Theme
//!
//! Five color tokens picked from the profile's theme discriminator.
//! Only "Boy" and "Girl" select a palette; everything else is neutral.

use serde::{Deserialize, Serialize};

/// Palette applied uniformly across every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub title: &'static str,
    pub tile_background: &'static str,
    pub label: &'static str,
    pub button: &'static str,
}

pub static BOY_THEME: Theme = Theme {
    background: "#E6F0FF",
    title: "#1E3A8A",
    tile_background: "#DBEAFE",
    label: "#1E3A8A",
    button: "#3B82F6",
};

pub static GIRL_THEME: Theme = Theme {
    background: "#FFE6F2",
    title: "#9D174D",
    tile_background: "#FCE7F3",
    label: "#9D174D",
    button: "#EC4899",
};

pub static NEUTRAL_THEME: Theme = Theme {
    background: "#F5F5F5",
    title: "#1F2937",
    tile_background: "#ffffff",
    label: "#1F2937",
    button: "#4F46E5",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Boy,
    Girl,
    #[default]
    Neutral,
}

impl ThemeKind {
    /// Exact, case-sensitive match on the stored discriminator
    pub fn from_discriminator(value: Option<&str>) -> Self {
        match value {
            Some("Boy") => ThemeKind::Boy,
            Some("Girl") => ThemeKind::Girl,
            _ => ThemeKind::Neutral,
        }
    }

    pub fn palette(self) -> &'static Theme {
        match self {
            ThemeKind::Boy => &BOY_THEME,
            ThemeKind::Girl => &GIRL_THEME,
            ThemeKind::Neutral => &NEUTRAL_THEME,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Boy => "boy",
            ThemeKind::Girl => "girl",
            ThemeKind::Neutral => "neutral",
        }
    }
}

/// Resolve the palette for a theme discriminator
///
/// Pure and total: always one of the three static palettes, so two calls with
/// the same input return the same reference.
pub fn resolve_theme(discriminator: Option<&str>) -> &'static Theme {
    ThemeKind::from_discriminator(discriminator).palette()
}
