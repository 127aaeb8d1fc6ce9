use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service or package offered by the shop.
///
/// `duration` is in minutes and `price` in the shop's currency unit.
/// Disabled services stay in the catalog but cannot be selected for
/// new bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub is_package: bool,
    pub price: i64,
    pub duration: i64,
    pub description: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(default)]
    pub is_package: bool,
    pub price: i64,
    pub duration: i64,
    pub description: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Partial update: `None` fields keep their current value. A set
/// description can therefore be changed but not cleared back to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub is_package: Option<bool>,
    pub price: Option<i64>,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

/// One service line on an appointment, frozen at booking time so later
/// catalog edits do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentService {
    pub service_id: Uuid,
    pub name: String,
    pub price: i64,
    pub duration: i64,
    pub quantity: u32,
}

/// The in-progress selection on a booking form: service id mapped to
/// quantity. Totals are computed against the service catalog; ids that
/// do not resolve to a known service contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSelection(pub HashMap<Uuid, u32>);

impl ServiceSelection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total minutes a booking with this selection would occupy.
    pub fn total_duration(&self, services: &[Service]) -> i64 {
        services
            .iter()
            .filter_map(|s| self.0.get(&s.id).map(|qty| s.duration * i64::from(*qty)))
            .sum()
    }

    pub fn total_price(&self, services: &[Service]) -> i64 {
        services
            .iter()
            .filter_map(|s| self.0.get(&s.id).map(|qty| s.price * i64::from(*qty)))
            .sum()
    }

    /// Resolves the selection into appointment line items.
    pub fn line_items(&self, services: &[Service]) -> Vec<AppointmentService> {
        services
            .iter()
            .filter_map(|s| {
                self.0.get(&s.id).map(|qty| AppointmentService {
                    service_id: s.id,
                    name: s.name.clone(),
                    price: s.price,
                    duration: s.duration,
                    quantity: *qty,
                })
            })
            .collect()
    }
}
