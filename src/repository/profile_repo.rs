//! Child Profile Repository
//!
//! Stored as `{ name, age, themeColor }`. Records written before the theme
//! discriminator was renamed carry `sex` instead; both are read here so
//! nothing above this layer sees the old name.

use serde_json::Value;
use std::sync::Arc;

use super::traits::KeyValueStore;
use crate::domain::{ChildProfile, DomainResult};

pub const PROFILE_KEY: &str = "childProfile";

/// Parse a stored profile record, `None` when unreadable
pub fn profile_from_record(raw: &str) -> Option<ChildProfile> {
    let record = match serde_json::from_str::<Value>(raw) {
        Ok(record) if record.is_object() => record,
        Ok(_) => {
            log::warn!("Stored profile is not an object, ignoring it");
            return None;
        }
        Err(e) => {
            log::warn!("Unreadable stored profile, ignoring it: {}", e);
            return None;
        }
    };

    let field = |key: &str| -> Option<String> {
        match record.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    };

    let theme_color = field("themeColor")
        .filter(|s| !s.is_empty())
        .or_else(|| field("sex"))
        .unwrap_or_default();

    Some(ChildProfile {
        name: field("name").unwrap_or_default(),
        age: field("age").unwrap_or_default(),
        theme_color,
    })
}

#[derive(Clone)]
pub struct ProfileRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl ProfileRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The stored profile, `None` if there is none or it cannot be read
    pub async fn load(&self) -> DomainResult<Option<ChildProfile>> {
        let raw = self.kv.get(PROFILE_KEY).await?;
        Ok(raw.as_deref().and_then(profile_from_record))
    }

    /// Write the profile in canonical form
    pub async fn save(&self, profile: &ChildProfile) -> DomainResult<()> {
        let record = serde_json::to_string(profile)?;
        self.kv.set(PROFILE_KEY, &record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryKvStore;

    #[test]
    fn test_legacy_sex_field_maps_to_theme_color() {
        let profile = profile_from_record(r#"{"name": "Sam", "age": "6", "sex": "Boy"}"#).unwrap();
        assert_eq!(profile, ChildProfile::new("Sam", "6", "Boy"));
    }

    #[test]
    fn test_theme_color_wins_over_sex() {
        let profile = profile_from_record(r#"{"name": "Sam", "sex": "Boy", "themeColor": "Girl"}"#).unwrap();
        assert_eq!(profile.theme_color, "Girl");

        let profile = profile_from_record(r#"{"name": "Sam", "sex": "Boy", "themeColor": ""}"#).unwrap();
        assert_eq!(profile.theme_color, "Boy");
    }

    #[test]
    fn test_lenient_fields() {
        let profile = profile_from_record(r#"{"name": "Ava", "age": 4}"#).unwrap();
        assert_eq!(profile.age, "4");
        assert_eq!(profile.theme_color, "");
    }

    #[test]
    fn test_unreadable_records() {
        assert_eq!(profile_from_record("nope"), None);
        assert_eq!(profile_from_record(r#"["Sam"]"#), None);
    }

    #[tokio::test]
    async fn test_save_writes_canonical_layout() {
        let kv = Arc::new(InMemoryKvStore::with_entries([(
            PROFILE_KEY,
            r#"{"name": "Sam", "age": "6", "sex": "Boy"}"#,
        )]));
        let repo = ProfileRepository::new(kv.clone());

        let profile = repo.load().await.unwrap().unwrap();
        repo.save(&profile).await.unwrap();

        let raw = kv.get(PROFILE_KEY).await.unwrap().unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored["themeColor"], "Boy");
        assert!(stored.get("sex").is_none());
    }

    #[tokio::test]
    async fn test_missing_profile() {
        let repo = ProfileRepository::new(Arc::new(InMemoryKvStore::new()));
        assert_eq!(repo.load().await.unwrap(), None);
    }
}
