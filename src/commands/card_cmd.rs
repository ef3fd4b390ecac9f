//! Commands for card collections
//!
//! Listing, parent-side edits, and speaking a card.

use serde::Serialize;

use super::parse_category;
use crate::domain::{Card, CardDraft, Category};
use crate::screen::tap_card;
use crate::AppState;

/// A collection after an edit
#[derive(Debug, Clone, Serialize)]
pub struct CardsView {
    pub category: Category,
    pub cards: Vec<Card>,
    /// False when the edit could not be written; it is kept in memory only
    pub persisted: bool,
}

/// List the cards of a category (defaults when nothing is stored)
pub async fn list_cards(state: &AppState, category: String) -> Result<Vec<Card>, String> {
    let category = parse_category(&category)?;
    state
        .cards
        .load_collection(category)
        .await
        .map_err(|e| e.to_string())
}

/// Add a card to the end of a category
pub async fn add_card(
    state: &AppState,
    category: String,
    text: String,
    image: Option<String>,
    icon: Option<String>,
) -> Result<CardsView, String> {
    let category = parse_category(&category)?;
    let mut collection = state.cards.open(category).await.map_err(|e| e.to_string())?;

    let draft = CardDraft {
        text,
        image_ref: image,
        icon_ref: icon,
    };
    let cards = state
        .cards
        .add_card(&mut collection, draft)
        .await
        .map_err(|e| e.user_message().to_string())?;

    Ok(CardsView {
        category,
        cards,
        persisted: collection.is_persisted(),
    })
}

/// Remove the first card with this label
pub async fn remove_card(state: &AppState, category: String, label: String) -> Result<CardsView, String> {
    let category = parse_category(&category)?;
    let mut collection = state.cards.open(category).await.map_err(|e| e.to_string())?;

    if collection.find(&label).is_none() {
        log::info!("No {} card labelled '{}', nothing removed", category, label);
    }
    let cards = state
        .cards
        .remove_card(&mut collection, &label)
        .await
        .map_err(|e| e.to_string())?;

    Ok(CardsView {
        category,
        cards,
        persisted: collection.is_persisted(),
    })
}

/// Speak a card as if the child tapped it
pub async fn speak_card(state: &AppState, category: String, label: String) -> Result<(), String> {
    let category = parse_category(&category)?;
    let collection = state.cards.open(category).await.map_err(|e| e.to_string())?;

    let card = collection
        .find(&label)
        .ok_or_else(|| format!("No {} card labelled '{}'", category, label))?;
    tap_card(state.speaker.as_ref(), &state.config.speech, card);
    Ok(())
}

/// Rewrite legacy string-array records in canonical form
pub async fn migrate_cards(state: &AppState) -> Result<usize, String> {
    state
        .cards
        .migrate_legacy_records()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingSpeaker;
    use crate::config::Config;
    use crate::repository::InMemoryKvStore;
    use std::sync::Arc;

    async fn state_with(speaker: Arc<RecordingSpeaker>) -> AppState {
        AppState::with_store(Config::default(), Arc::new(InMemoryKvStore::new()), speaker)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let state = state_with(Arc::default()).await;

        let view = add_card(&state, "food".into(), "Pizza".into(), Some("file:///pizza.jpg".into()), None)
            .await
            .unwrap();
        assert!(view.persisted);
        assert_eq!(view.cards.len(), 10);

        let cards = list_cards(&state, "food".into()).await.unwrap();
        assert_eq!(cards.last(), Some(&Card::new("Pizza").with_image("file:///pizza.jpg")));
    }

    #[tokio::test]
    async fn test_feeling_validation_message() {
        let state = state_with(Arc::default()).await;
        let err = add_card(&state, "feelings".into(), "very sad".into(), None, None)
            .await
            .unwrap_err();
        assert_eq!(err, "One-word only. E.g. Happy, Sad, Angry.");
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let state = state_with(Arc::default()).await;
        let err = list_cards(&state, "toys".into()).await.unwrap_err();
        assert!(err.contains("Unknown category"));
    }

    #[tokio::test]
    async fn test_remove() {
        let state = state_with(Arc::default()).await;
        let view = remove_card(&state, "people".into(), "Teacher".into()).await.unwrap();
        assert_eq!(view.cards.len(), 7);

        let view = remove_card(&state, "people".into(), "Teacher".into()).await.unwrap();
        assert_eq!(view.cards.len(), 7);
    }

    #[tokio::test]
    async fn test_speak_card() {
        let speaker = Arc::new(RecordingSpeaker::default());
        let state = state_with(speaker.clone()).await;

        speak_card(&state, "phrases".into(), "Thank You".into()).await.unwrap();
        assert_eq!(speaker.spoken(), vec!["Thank You"]);

        assert!(speak_card(&state, "phrases".into(), "Goodbye".into()).await.is_err());
    }
}
