//! Parent PIN Repository
//!
//! The PIN is stored as a bare string under `parentPin`.

use serde::Serialize;
use std::sync::Arc;

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

pub const PIN_KEY: &str = "parentPin";

const PIN_LENGTH: std::ops::RangeInclusive<usize> = 4..=8;

/// Outcome of a PIN entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinCheck {
    /// No PIN yet; the parent has to create one first
    NotSet,
    Granted,
    Denied,
}

#[derive(Clone)]
pub struct PinRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl PinRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    async fn stored(&self) -> DomainResult<Option<String>> {
        Ok(self.kv.get(PIN_KEY).await?.filter(|pin| !pin.is_empty()))
    }

    pub async fn has_pin(&self) -> DomainResult<bool> {
        Ok(self.stored().await?.is_some())
    }

    /// Create or replace the PIN (4–8 digits)
    pub async fn set_pin(&self, pin: &str) -> DomainResult<()> {
        if !PIN_LENGTH.contains(&pin.len()) || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidInput(
                "PIN must be 4 to 8 digits.".to_string(),
            ));
        }
        self.kv.set(PIN_KEY, pin).await?;
        log::info!("Parent PIN updated");
        Ok(())
    }

    pub async fn check(&self, entered: &str) -> DomainResult<PinCheck> {
        let result = match self.stored().await? {
            None => PinCheck::NotSet,
            Some(pin) if pin == entered => PinCheck::Granted,
            Some(_) => PinCheck::Denied,
        };
        if result == PinCheck::Denied {
            log::warn!("Incorrect parent PIN entered");
        }
        Ok(result)
    }
}
