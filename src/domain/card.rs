//! Card Entity
//!
//! A single labeled, optionally illustrated unit of spoken content.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Numbers shown on the numbers grid and used by the numbers quiz
pub const NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

/// A tappable card
///
/// The label is what gets spoken and displayed; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    /// URI or local file reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Symbolic icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_ref: Option<String>,
}

/// What a tile shows above its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisual<'a> {
    Image(&'a str),
    Icon(&'a str),
    /// Category fallback when neither image nor icon is set
    Glyph(&'static str),
}

impl Card {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image_ref: None,
            icon_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = Some(icon_ref.into());
        self
    }

    /// Image wins over icon; the category glyph is the last resort
    pub fn visual(&self, category: Category) -> CardVisual<'_> {
        if let Some(image) = self.image_ref.as_deref().filter(|s| !s.is_empty()) {
            return CardVisual::Image(image);
        }
        if let Some(icon) = self.icon_ref.as_deref().filter(|s| !s.is_empty()) {
            return CardVisual::Icon(icon);
        }
        CardVisual::Glyph(category.fallback_glyph())
    }
}

/// Raw parent input for a new card, before category validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub text: String,
    pub image_ref: Option<String>,
    pub icon_ref: Option<String>,
}

impl CardDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = Some(icon_ref.into());
        self
    }
}

/// A–Z, generated rather than stored
pub fn alphabet_cards() -> Vec<Card> {
    ('A'..='Z').map(|c| Card::new(c.to_string())).collect()
}

/// 1–20, generated rather than stored
pub fn number_cards() -> Vec<Card> {
    NUMBER_RANGE.map(|n| Card::new(n.to_string())).collect()
}
