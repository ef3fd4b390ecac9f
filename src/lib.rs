//! BrightSpeak Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - context: Shared child profile state
//! - games: Quiz and Ten-in-the-Bed game state
//! - audio: Speech and music collaborators
//! - screen: Mount-guarded screen loading
//! - commands: Command handlers over `AppState`

use std::sync::Arc;

pub mod audio;
pub mod commands;
pub mod config;
pub mod context;
pub mod domain;
pub mod games;
pub mod repository;
pub mod screen;

use audio::{LogMusicPlayer, MusicPlayer, Speaker};
use config::Config;
use context::ProfileContext;
use domain::DomainResult;
use repository::{
    init_db, CardStore, DbState, KeyValueStore, PinRepository, ProfileRepository, SqliteKvStore,
};

/// Application state shared across commands
pub struct AppState {
    pub config: Config,
    /// `None` when running on a non-SQLite store
    pub db_state: Option<DbState>,
    pub cards: CardStore,
    pub profiles: ProfileContext,
    pub pins: PinRepository,
    pub speaker: Arc<dyn Speaker>,
    pub music: Arc<dyn MusicPlayer>,
}

impl AppState {
    /// State over an arbitrary key-value store
    pub async fn with_store(
        config: Config,
        kv: Arc<dyn KeyValueStore>,
        speaker: Arc<dyn Speaker>,
    ) -> DomainResult<Self> {
        let profiles = ProfileContext::load(ProfileRepository::new(kv.clone())).await?;
        Ok(Self {
            config,
            db_state: None,
            cards: CardStore::new(kv.clone()),
            profiles,
            pins: PinRepository::new(kv),
            speaker,
            music: Arc::new(LogMusicPlayer),
        })
    }
}

/// Open the configured database, migrate legacy records, and build the state
pub async fn init_app(config: Config, speaker: Arc<dyn Speaker>) -> DomainResult<AppState> {
    let db_path = config.db_path();
    log::info!("Opening database at {}", db_path.display());

    let db_state = init_db(&db_path).await?;
    let kv = Arc::new(SqliteKvStore::new(db_state.conn.clone()));

    let mut state = AppState::with_store(config, kv, speaker).await?;
    state.db_state = Some(db_state);

    match state.cards.migrate_legacy_records().await {
        Ok(0) => {}
        Ok(migrated) => log::info!("Migrated {} legacy card records", migrated),
        Err(e) => log::warn!("Legacy card migration skipped: {}", e),
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogSpeaker;
    use crate::domain::Category;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_app_persists_between_runs() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp.path().join("data"),
            ..Default::default()
        };

        let state = init_app(config.clone(), Arc::new(LogSpeaker)).await.unwrap();
        assert!(state.db_state.as_ref().unwrap().is_initialized().await);
        let mut food = state.cards.open(Category::Food).await.unwrap();
        state
            .cards
            .add_card(&mut food, domain::CardDraft::new("Pizza"))
            .await
            .unwrap();
        drop(state);

        let state = init_app(config, Arc::new(LogSpeaker)).await.unwrap();
        let food = state.cards.load_collection(Category::Food).await.unwrap();
        assert_eq!(food.last().map(|c| c.label.as_str()), Some("Pizza"));
        assert!(temp.path().join("data/brightspeak.db").exists());
    }
}
