//! Commands Layer
//!
//! Command handlers that bridge a host shell (mobile UI or CLI) to the core.
//! Errors cross this boundary as strings.

mod card_cmd;
mod game_cmd;
mod pin_cmd;
mod profile_cmd;
mod theme_cmd;

pub use card_cmd::*;
pub use game_cmd::*;
pub use pin_cmd::*;
pub use profile_cmd::*;
pub use theme_cmd::*;

use crate::domain::Category;

fn parse_category(category: &str) -> Result<Category, String> {
    category.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}
