//! Card Store
//!
//! Loads card collections in whatever layout they were stored in and writes
//! them back in the canonical one:
//! - legacy: `{ "<field>": ["Water", "Juice"] }`
//! - canonical: `{ "<field>": [{ "name": "Water", "image": "...", "icon": "..." }] }`
//!   (phrases use `text` instead of `name` and carry no icon)
//!
//! Every mutation rewrites the whole collection.

use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::traits::KeyValueStore;
use crate::domain::{Card, CardDraft, Category, DomainResult};

/// Turn a raw collection record into cards
///
/// Absent, unparsable, or empty records yield the category defaults.
/// Entries without a usable label are dropped.
pub fn normalize(category: Category, raw: Option<&str>) -> Vec<Card> {
    let Some(raw) = raw else {
        return category.defaults();
    };

    let record: Value = match serde_json::from_str(raw) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Unreadable {} record, using defaults: {}", category, e);
            return category.defaults();
        }
    };

    let entries = match record.get(category.record_field()).and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return category.defaults(),
    };

    let cards: Vec<Card> = entries
        .iter()
        .filter_map(|entry| normalize_entry(category, entry))
        .collect();

    if cards.is_empty() {
        log::warn!("No usable {} cards in stored record, using defaults", category);
        return category.defaults();
    }
    if cards.len() != entries.len() {
        log::warn!(
            "Dropped {} unusable {} entries",
            entries.len() - cards.len(),
            category
        );
    }
    cards
}

fn normalize_entry(category: Category, entry: &Value) -> Option<Card> {
    match entry {
        Value::String(legacy) => {
            let label = category.derive_label(legacy);
            (!label.trim().is_empty()).then(|| Card::new(label))
        }
        Value::Object(fields) => {
            let label = text_field(fields, category.label_field())
                .or_else(|| text_field(fields, "name"))
                .or_else(|| text_field(fields, "text"))?;
            Some(Card {
                label: label.to_string(),
                image_ref: text_field(fields, "image").map(str::to_string),
                icon_ref: text_field(fields, "icon")
                    .filter(|_| category.supports_icon())
                    .map(str::to_string),
            })
        }
        _ => None,
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Canonical record for a collection
pub fn to_record(category: Category, cards: &[Card]) -> Value {
    let entries: Vec<Value> = cards
        .iter()
        .map(|card| {
            let mut fields = Map::new();
            fields.insert(category.label_field().to_string(), json!(card.label));
            if let Some(image) = &card.image_ref {
                fields.insert("image".to_string(), json!(image));
            }
            if let Some(icon) = card.icon_ref.as_ref().filter(|_| category.supports_icon()) {
                fields.insert("icon".to_string(), json!(icon));
            }
            Value::Object(fields)
        })
        .collect();

    let mut record = Map::new();
    record.insert(category.record_field().to_string(), Value::Array(entries));
    Value::Object(record)
}

/// Whether a raw record still holds bare-string entries
fn is_legacy(category: Category, raw: &str) -> bool {
    serde_json::from_str::<Value>(raw)
        .ok()
        .as_ref()
        .and_then(|record| record.get(category.record_field()))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().any(Value::is_string))
        .unwrap_or(false)
}

/// In-memory editing state of one collection, as held by a screen
///
/// Edits are applied here first and then persisted; when a write fails the
/// edit stays visible and `is_persisted()` turns false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCollection {
    category: Category,
    cards: Vec<Card>,
    persisted: bool,
}

impl CardCollection {
    pub fn new(category: Category, cards: Vec<Card>) -> Self {
        Self {
            category,
            cards,
            persisted: true,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// False after a write that failed and has not been retried
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn find(&self, label: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.label == label)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Card collections over a key-value store
#[derive(Clone)]
pub struct CardStore {
    kv: Arc<dyn KeyValueStore>,
}

impl CardStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Ready-to-render cards for a category
    pub async fn load_collection(&self, category: Category) -> DomainResult<Vec<Card>> {
        let raw = self.kv.get(category.storage_key()).await?;
        Ok(normalize(category, raw.as_deref()))
    }

    /// Load a collection for editing
    pub async fn open(&self, category: Category) -> DomainResult<CardCollection> {
        let cards = self.load_collection(category).await?;
        Ok(CardCollection::new(category, cards))
    }

    /// Overwrite the stored collection with `cards`
    pub async fn save_collection(&self, category: Category, cards: &[Card]) -> DomainResult<()> {
        let record = serde_json::to_string(&to_record(category, cards))?;
        self.kv.set(category.storage_key(), &record).await
    }

    /// Validate `draft`, append it, and persist the whole collection
    ///
    /// Returns the updated cards. Validation errors leave the collection
    /// untouched; write failures do not (see `CardCollection`).
    pub async fn add_card(&self, collection: &mut CardCollection, draft: CardDraft) -> DomainResult<Vec<Card>> {
        let Some(card) = collection.category.prepare(draft)? else {
            return Ok(collection.cards.clone());
        };

        log::info!("Adding {} card '{}'", collection.category, card.label);
        collection.cards.push(card);
        self.persist(collection).await;
        Ok(collection.cards.clone())
    }

    /// Remove the first card labelled `label`; no-op when there is none
    pub async fn remove_card(&self, collection: &mut CardCollection, label: &str) -> DomainResult<Vec<Card>> {
        if let Some(index) = collection.cards.iter().position(|card| card.label == label) {
            log::info!("Removing {} card '{}'", collection.category, label);
            collection.cards.remove(index);
            self.persist(collection).await;
        }
        Ok(collection.cards.clone())
    }

    async fn persist(&self, collection: &mut CardCollection) {
        match self.save_collection(collection.category, &collection.cards).await {
            Ok(()) => collection.persisted = true,
            Err(e) => {
                log::error!("Failed to save {} collection: {}", collection.category, e);
                collection.persisted = false;
            }
        }
    }

    /// Rewrite every stored legacy record in canonical form
    ///
    /// Absent records are left absent. Records that would lose entries in
    /// the rewrite are left as they are, and a failed write only skips that
    /// record. Returns how many records were rewritten.
    pub async fn migrate_legacy_records(&self) -> DomainResult<usize> {
        let mut migrated = 0;
        for category in Category::ALL {
            let Some(raw) = self.kv.get(category.storage_key()).await? else {
                continue;
            };
            if !is_legacy(category, &raw) {
                continue;
            }
            let Some(cards) = convert_all(category, &raw) else {
                log::warn!("Leaving legacy {} record as is: some entries have no usable label", category);
                continue;
            };
            if let Err(e) = self.save_collection(category, &cards).await {
                log::error!("Failed to migrate legacy {} record: {}", category, e);
                continue;
            }
            log::info!("Migrated legacy {} record ({} cards)", category, cards.len());
            migrated += 1;
        }
        Ok(migrated)
    }
}

/// Every entry of a record as a card, `None` if any entry would be dropped
fn convert_all(category: Category, raw: &str) -> Option<Vec<Card>> {
    let record: Value = serde_json::from_str(raw).ok()?;
    let entries = record.get(category.record_field())?.as_array()?;
    if entries.is_empty() {
        return None;
    }
    entries
        .iter()
        .map(|entry| normalize_entry(category, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_absent_and_empty_records_use_defaults() {
        for category in Category::ALL {
            assert_eq!(normalize(category, None), category.defaults());
            let empty = format!(r#"{{"{}": []}}"#, category.record_field());
            assert_eq!(normalize(category, Some(empty.as_str())), category.defaults());
            assert_eq!(normalize(category, Some("{}")), category.defaults());
        }
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        assert_eq!(normalize(Category::Food, Some("{not json")), Category::Food.defaults());
        assert_eq!(normalize(Category::Food, Some(r#"{"food": "Water"}"#)), Category::Food.defaults());
    }

    #[test]
    fn test_legacy_strings() {
        let cards = normalize(Category::People, Some(r#"{"peoples": ["Mummy", "Coach"]}"#));
        assert_eq!(labels(&cards), vec!["Mummy", "Coach"]);
        assert!(cards.iter().all(|c| c.image_ref.is_none() && c.icon_ref.is_none()));
    }

    #[test]
    fn test_legacy_feelings_are_composed() {
        let cards = normalize(
            Category::Feelings,
            Some(r#"{"feelings": ["Happy", "I Feel Sad", "Grumpy"]}"#),
        );
        assert_eq!(labels(&cards), vec!["I feel Happy", "I Feel Sad", "I feel Grumpy"]);
    }

    #[test]
    fn test_canonical_objects_kept() {
        let raw = r#"{"food": [{"name": "Pizza", "image": "file:///p.jpg"}, {"name": "Tea", "icon": "coffee"}]}"#;
        let cards = normalize(Category::Food, Some(raw));
        assert_eq!(
            cards,
            vec![
                Card::new("Pizza").with_image("file:///p.jpg"),
                Card::new("Tea").with_icon("coffee"),
            ]
        );
    }

    #[test]
    fn test_phrase_objects_use_text() {
        let raw = r#"{"phrases": [{"text": "Hello", "image": "img.png"}]}"#;
        assert_eq!(
            normalize(Category::Phrases, Some(raw)),
            vec![Card::new("Hello").with_image("img.png")]
        );
    }

    #[test]
    fn test_unusable_entries_dropped() {
        let raw = r#"{"food": [{"name": ""}, 42, "Toast", {"image": "x.png"}]}"#;
        assert_eq!(labels(&normalize(Category::Food, Some(raw))), vec!["Toast"]);

        let all_bad = r#"{"food": [{"name": ""}, 42]}"#;
        assert_eq!(normalize(Category::Food, Some(all_bad)), Category::Food.defaults());
    }

    #[test]
    fn test_record_layout() {
        let record = to_record(Category::Phrases, &[Card::new("Hi").with_image("a.png").with_icon("hand")]);
        assert_eq!(record, json!({"phrases": [{"text": "Hi", "image": "a.png"}]}));

        let record = to_record(Category::People, &[Card::new("Nanna").with_icon("account")]);
        assert_eq!(record, json!({"peoples": [{"name": "Nanna", "icon": "account"}]}));
    }

    #[test]
    fn test_legacy_detection() {
        assert!(is_legacy(Category::Food, r#"{"food": ["Water"]}"#));
        assert!(!is_legacy(Category::Food, r#"{"food": [{"name": "Water"}]}"#));
        assert!(!is_legacy(Category::Food, "garbage"));
    }

    #[test]
    fn test_convert_all_refuses_lossy_records() {
        let cards = convert_all(Category::Food, r#"{"food": ["Tea", {"name": "Cake"}]}"#).unwrap();
        assert_eq!(labels(&cards), vec!["Tea", "Cake"]);

        assert_eq!(convert_all(Category::Food, r#"{"food": ["Tea", {"image": "x.png"}]}"#), None);
        assert_eq!(convert_all(Category::Food, r#"{"food": ["  "]}"#), None);
        assert_eq!(convert_all(Category::Food, r#"{"food": []}"#), None);
    }

    #[test]
    fn test_collection_accessors() {
        let collection = CardCollection::new(Category::Food, Category::Food.defaults());
        assert_eq!(collection.len(), 9);
        assert!(collection.is_persisted());
        assert!(collection.find("Milk").is_some());
        assert!(collection.find("Pizza").is_none());
    }
}
