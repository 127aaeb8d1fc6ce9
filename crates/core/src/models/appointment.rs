use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingError;
use crate::models::service::AppointmentService;

/// Lifecycle of an appointment. Only `pending` and `confirmed`
/// appointments block time slots on the booking calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    /// Whether an appointment in this state occupies its interval on
    /// the calendar.
    pub fn blocks_slots(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "no-show" => Ok(AppointmentStatus::NoShow),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: String,
    pub client_name: Option<String>,
    pub services: Vec<AppointmentService>,
    pub total_price: i64,
    pub total_duration: i64,
    pub date: NaiveDate,
    /// Slot label the booking starts at, e.g. "9:30 AM".
    pub time: String,
    pub barber_id: Option<Uuid>,
    pub notes: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub client_id: String,
    pub client_name: Option<String>,
    /// Service id mapped to quantity; must name at least one service.
    pub services: HashMap<Uuid, u32>,
    pub date: NaiveDate,
    pub time: String,
    pub barber_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub total_price: i64,
    pub total_duration: i64,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    pub status: AppointmentStatus,
}
