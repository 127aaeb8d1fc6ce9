use std::str::FromStr;

use barberbook_core::errors::BookingError;
use barberbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    barber::Barber,
    service::{AppointmentService, Service},
    shop::ShopSettings,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub name: String,
    pub is_package: bool,
    pub price: i64,
    pub duration: i64,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            name: row.name,
            is_package: row.is_package,
            price: row.price,
            duration: row.duration,
            description: row.description,
            enabled: row.enabled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarber {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbBarber> for Barber {
    fn from(row: DbBarber) -> Self {
        Barber {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub client_id: String,
    pub client_name: Option<String>,
    pub services: Json<Vec<AppointmentService>>,
    pub total_price: i64,
    pub total_duration: i64,
    pub date: NaiveDate,
    pub time: String,
    pub barber_id: Option<Uuid>,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = BookingError;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: row.id,
            client_id: row.client_id,
            client_name: row.client_name,
            services: row.services.0,
            total_price: row.total_price,
            total_duration: row.total_duration,
            date: row.date,
            time: row.time,
            barber_id: row.barber_id,
            notes: row.notes,
            status: AppointmentStatus::from_str(&row.status)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShopSettings {
    pub id: i32,
    pub opening_time: String,
    pub closing_time: String,
    pub updated_at: DateTime<Utc>,
}

impl From<DbShopSettings> for ShopSettings {
    fn from(row: DbShopSettings) -> Self {
        ShopSettings {
            opening_time: row.opening_time,
            closing_time: row.closing_time,
        }
    }
}
