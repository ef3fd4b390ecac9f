//! Commands for the parent PIN gate

use crate::repository::PinCheck;
use crate::AppState;

/// Create or replace the parent PIN
pub async fn set_parent_pin(state: &AppState, pin: String) -> Result<(), String> {
    state
        .pins
        .set_pin(pin.trim())
        .await
        .map_err(|e| e.user_message().to_string())
}

/// Check an entered PIN before opening the parent area
pub async fn check_parent_pin(state: &AppState, pin: String) -> Result<PinCheck, String> {
    state.pins.check(pin.trim()).await.map_err(|e| e.to_string())
}
