//! Card Categories
//!
//! Each stored category owns its storage key, record layout, fallback glyph,
//! default cards and input validation policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::card::{Card, CardDraft};
use super::defaults;
use super::error::{DomainError, DomainResult};

const FEELING_PREFIX: &str = "I feel ";

/// A stored card category (letters and numbers are generated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phrases,
    Food,
    People,
    Feelings,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Phrases,
        Category::Food,
        Category::People,
        Category::Feelings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phrases => "phrases",
            Category::Food => "food",
            Category::People => "people",
            Category::Feelings => "feelings",
        }
    }

    /// Key of the collection record in the key-value store
    pub fn storage_key(&self) -> &'static str {
        match self {
            Category::Phrases => "childPhrases",
            Category::Food => "childFood",
            Category::People => "childPeople",
            Category::Feelings => "childFeelings",
        }
    }

    /// Name of the array field inside the collection record
    pub fn record_field(&self) -> &'static str {
        match self {
            Category::Phrases => "phrases",
            Category::Food => "food",
            Category::People => "peoples",
            Category::Feelings => "feelings",
        }
    }

    /// Field that carries the label inside a stored card object
    pub fn label_field(&self) -> &'static str {
        match self {
            Category::Phrases => "text",
            _ => "name",
        }
    }

    /// Phrase records have no icon slot
    pub fn supports_icon(&self) -> bool {
        !matches!(self, Category::Phrases)
    }

    pub fn fallback_glyph(&self) -> &'static str {
        match self {
            Category::Phrases => "💬",
            Category::Food => "🍽️",
            Category::People => "👤",
            Category::Feelings => "😊",
        }
    }

    pub fn defaults(&self) -> Vec<Card> {
        match self {
            Category::Phrases => defaults::phrases(),
            Category::Food => defaults::food(),
            Category::People => defaults::people(),
            Category::Feelings => defaults::feelings(),
        }
    }

    /// Label for a legacy bare-string entry
    ///
    /// Feelings were stored both as bare words ("Happy") and as composed
    /// phrases ("I Feel Happy"); the composed phrase is canonical.
    pub fn derive_label(&self, legacy: &str) -> String {
        match self {
            Category::Feelings => {
                let word = legacy.trim();
                if word.is_empty() || is_composed_feeling(word) {
                    word.to_string()
                } else {
                    format!("{}{}", FEELING_PREFIX, word)
                }
            }
            _ => legacy.to_string(),
        }
    }

    /// Validate parent input and build the card to append
    ///
    /// `Ok(None)` means the input is silently ignored.
    pub fn prepare(&self, draft: CardDraft) -> DomainResult<Option<Card>> {
        let text = draft.text.trim();
        let image_ref = draft.image_ref.filter(|s| !s.is_empty());
        let icon_ref = draft.icon_ref.filter(|s| !s.is_empty() && self.supports_icon());

        let label = match self {
            Category::Feelings => {
                if text.is_empty() {
                    return Err(DomainError::InvalidInput("Please enter a feeling.".to_string()));
                }
                if text.chars().any(char::is_whitespace) {
                    return Err(DomainError::InvalidInput(
                        "One-word only. E.g. Happy, Sad, Angry.".to_string(),
                    ));
                }
                format!("{}{}", FEELING_PREFIX, text)
            }
            _ => {
                if text.is_empty() {
                    return Ok(None);
                }
                text.to_string()
            }
        };

        Ok(Some(Card {
            label,
            image_ref,
            icon_ref,
        }))
    }
}

fn is_composed_feeling(text: &str) -> bool {
    text.to_lowercase().starts_with(&FEELING_PREFIX.to_lowercase())
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phrases" | "phrase" => Ok(Category::Phrases),
            "food" => Ok(Category::Food),
            "people" | "peoples" => Ok(Category::People),
            "feelings" | "feeling" => Ok(Category::Feelings),
            other => Err(DomainError::InvalidInput(format!("Unknown category: {}", other))),
        }
    }
}
