use serde::{Deserialize, Serialize};

use crate::availability::{DEFAULT_CLOSING_TIME, DEFAULT_OPENING_TIME};

/// Shop operating hours, one pair for the whole week.
///
/// Times are "HH:MM" wall-clock strings. There is deliberately no
/// per-day-of-week or holiday schedule; the shop opens and closes at
/// the same times every day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSettings {
    pub opening_time: String,
    pub closing_time: String,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            opening_time: DEFAULT_OPENING_TIME.to_string(),
            closing_time: DEFAULT_CLOSING_TIME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateShopSettingsRequest {
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}
