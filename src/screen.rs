//! Screen Mount Model
//!
//! What a card screen needs on mount: the child's name, the palette, and
//! the category's cards. Loads that finish after the screen was left are
//! discarded.

use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::audio::{Speaker, SpeechOptions};
use crate::domain::{Card, Category, DomainResult, Theme};
use crate::AppState;

/// Whether a screen is still mounted; clones share the flag
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    /// Await `fut`, dropping its result if the screen unmounted meanwhile
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if !self.is_mounted() {
            return None;
        }
        let output = fut.await;
        self.is_mounted().then_some(output)
    }
}

/// Everything a card grid renders
#[derive(Debug, Clone, Serialize)]
pub struct ScreenModel {
    pub category: Category,
    pub child_name: String,
    pub theme: &'static Theme,
    pub cards: Vec<Card>,
}

/// Load a category screen; `None` if it was left before loading finished
pub async fn mount_category_screen(
    state: &AppState,
    category: Category,
    guard: &MountGuard,
) -> DomainResult<Option<ScreenModel>> {
    let profile = state.profiles.profile_or_default();
    let theme = state.profiles.theme();

    let Some(cards) = guard.run(state.cards.load_collection(category)).await else {
        log::debug!("{} screen left before cards loaded", category);
        return Ok(None);
    };

    Ok(Some(ScreenModel {
        category,
        child_name: profile.display_name().to_string(),
        theme,
        cards: cards?,
    }))
}

/// Speak a tapped card
pub fn tap_card(speaker: &dyn Speaker, options: &SpeechOptions, card: &Card) {
    speaker.speak(&card.label, options);
}
