//! Domain Layer
//!
//! Contains all domain entities and core rules.
//! This layer has NO I/O (serde only for serialization).

mod card;
mod category;
pub mod defaults;
mod error;
mod profile;
mod theme;

pub use card::{alphabet_cards, number_cards, Card, CardDraft, CardVisual, NUMBER_RANGE};
pub use category::Category;
pub use error::{DomainError, DomainResult};
pub use profile::{ChildProfile, DEFAULT_CHILD_NAME};
pub use theme::{resolve_theme, Theme, ThemeKind, BOY_THEME, GIRL_THEME, NEUTRAL_THEME};
