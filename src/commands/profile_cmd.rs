//! Commands for the child profile

use crate::domain::ChildProfile;
use crate::AppState;

/// Current profile, `None` until a parent creates one
pub async fn get_profile(state: &AppState) -> Result<Option<ChildProfile>, String> {
    Ok(state.profiles.current())
}

/// Update the profile; omitted fields keep their current value
pub async fn save_profile(
    state: &AppState,
    name: Option<String>,
    age: Option<String>,
    theme_color: Option<String>,
) -> Result<ChildProfile, String> {
    let existing = state.profiles.profile_or_default();

    let updated = ChildProfile {
        name: name.map(|n| n.trim().to_string()).unwrap_or(existing.name),
        age: age.unwrap_or(existing.age),
        theme_color: theme_color.unwrap_or(existing.theme_color),
    };

    state
        .profiles
        .save(updated.clone())
        .await
        .map_err(|e| e.to_string())?;
    Ok(updated)
}
