//! Profile Context
//!
//! The child profile, loaded once and shared with every screen. Screens read
//! the current value or subscribe to changes; it only changes through
//! `save()` or `reload()`.

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::{ChildProfile, DomainResult, Theme};
use crate::repository::ProfileRepository;

/// Shared observable profile state
#[derive(Clone)]
pub struct ProfileContext {
    repo: ProfileRepository,
    tx: Arc<watch::Sender<Option<ChildProfile>>>,
}

impl ProfileContext {
    /// Load the stored profile and wrap it
    pub async fn load(repo: ProfileRepository) -> DomainResult<Self> {
        let profile = repo.load().await?;
        match &profile {
            Some(p) => log::info!("Loaded profile for '{}'", p.display_name()),
            None => log::info!("No child profile stored yet"),
        }
        let (tx, _rx) = watch::channel(profile);
        Ok(Self {
            repo,
            tx: Arc::new(tx),
        })
    }

    /// Current profile, `None` until a parent creates one
    pub fn current(&self) -> Option<ChildProfile> {
        self.tx.borrow().clone()
    }

    /// Current profile or an empty one (which displays as "Child")
    pub fn profile_or_default(&self) -> ChildProfile {
        self.current().unwrap_or_default()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ChildProfile>> {
        self.tx.subscribe()
    }

    /// Palette for the current profile
    pub fn theme(&self) -> &'static Theme {
        self.tx
            .borrow()
            .as_ref()
            .map(ChildProfile::theme)
            .unwrap_or_else(|| crate::domain::resolve_theme(None))
    }

    /// Persist `profile` and publish it to subscribers
    pub async fn save(&self, profile: ChildProfile) -> DomainResult<()> {
        self.repo.save(&profile).await?;
        log::info!("Saved profile for '{}'", profile.display_name());
        self.tx.send_replace(Some(profile));
        Ok(())
    }

    /// Re-read the stored profile and publish it
    pub async fn reload(&self) -> DomainResult<Option<ChildProfile>> {
        let profile = self.repo.load().await?;
        self.tx.send_replace(profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BOY_THEME, GIRL_THEME, NEUTRAL_THEME};
    use crate::repository::{InMemoryKvStore, KeyValueStore, PROFILE_KEY};

    #[tokio::test]
    async fn test_empty_context_uses_neutral_theme() {
        let repo = ProfileRepository::new(Arc::new(InMemoryKvStore::new()));
        let ctx = ProfileContext::load(repo).await.unwrap();

        assert_eq!(ctx.current(), None);
        assert_eq!(ctx.profile_or_default().display_name(), "Child");
        assert!(std::ptr::eq(ctx.theme(), &NEUTRAL_THEME));
    }

    #[tokio::test]
    async fn test_legacy_profile_drives_theme() {
        let kv = Arc::new(InMemoryKvStore::with_entries([(
            PROFILE_KEY,
            r#"{"name": "Sam", "age": "6", "sex": "Boy"}"#,
        )]));
        let ctx = ProfileContext::load(ProfileRepository::new(kv)).await.unwrap();

        assert!(std::ptr::eq(ctx.theme(), &BOY_THEME));
    }

    #[tokio::test]
    async fn test_save_notifies_subscribers() {
        let repo = ProfileRepository::new(Arc::new(InMemoryKvStore::new()));
        let ctx = ProfileContext::load(repo).await.unwrap();
        let mut rx = ctx.subscribe();

        ctx.save(ChildProfile::new("Ava", "5", "Girl")).await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|p| p.name.as_str()), Some("Ava"));
        assert!(std::ptr::eq(ctx.theme(), &GIRL_THEME));
    }

    #[tokio::test]
    async fn test_outside_writes_need_reload() {
        let kv = Arc::new(InMemoryKvStore::new());
        let ctx = ProfileContext::load(ProfileRepository::new(kv.clone())).await.unwrap();

        kv.set(PROFILE_KEY, r#"{"name": "Leo", "themeColor": "Boy"}"#).await.unwrap();
        assert_eq!(ctx.current(), None);

        let reloaded = ctx.reload().await.unwrap();
        assert_eq!(reloaded.map(|p| p.name), Some("Leo".to_string()));
        assert_eq!(ctx.current().map(|p| p.theme_color), Some("Boy".to_string()));
    }
}
