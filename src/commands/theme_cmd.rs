//! Commands for the palette

use crate::domain::{resolve_theme, Theme};
use crate::AppState;

/// Palette for `discriminator`, or for the current profile when omitted
pub async fn get_theme(state: &AppState, discriminator: Option<String>) -> Result<Theme, String> {
    let theme = match discriminator {
        Some(value) => resolve_theme(Some(value.as_str())),
        None => state.profiles.theme(),
    };
    Ok(*theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogSpeaker;
    use crate::config::Config;
    use crate::domain::{GIRL_THEME, NEUTRAL_THEME};
    use crate::repository::InMemoryKvStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_theme_lookup() {
        let state = AppState::with_store(Config::default(), Arc::new(InMemoryKvStore::new()), Arc::new(LogSpeaker))
            .await
            .unwrap();

        assert_eq!(get_theme(&state, None).await.unwrap(), NEUTRAL_THEME);
        assert_eq!(get_theme(&state, Some("Girl".into())).await.unwrap(), GIRL_THEME);
        assert_eq!(get_theme(&state, Some("girl".into())).await.unwrap(), NEUTRAL_THEME);
    }
}
