use axum::{
    extract::{Path, Query, State},
    Json,
};
use barberbook_core::errors::BookingError;
use barberbook_core::models::{
    appointment::{
        Appointment, AppointmentStatus, CreateAppointmentRequest, CreateAppointmentResponse,
        UpdateAppointmentStatusRequest,
    },
    service::{Service, ServiceSelection},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::handlers::availability::compute_availability;
use crate::handlers::settings::load_shop_settings;
use crate::{middleware::error_handling::AppError, ApiState};

/// Books a new appointment.
///
/// Totals are computed server-side from the enabled service catalog, and
/// the requested slot is re-checked against the day's availability just
/// before insert; a slot that has been taken in the meantime yields a
/// 409 rather than a double booking.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Json<CreateAppointmentResponse>, AppError> {
    if payload.services.is_empty() {
        return Err(AppError(BookingError::Validation(
            "At least one service must be selected".to_string(),
        )));
    }
    if payload.services.values().any(|qty| *qty == 0) {
        return Err(AppError(BookingError::Validation(
            "Service quantities must be at least 1".to_string(),
        )));
    }

    // Resolve the selection against the bookable catalog.
    let catalog: Vec<Service> =
        barberbook_db::repositories::service::get_services(&state.db_pool, true)
            .await
            .map_err(BookingError::Database)?
            .into_iter()
            .map(Service::from)
            .collect();

    let selection = ServiceSelection(payload.services.clone());
    let line_items = selection.line_items(&catalog);
    if line_items.len() != payload.services.len() {
        return Err(AppError(BookingError::Validation(
            "Selection contains unknown or disabled services".to_string(),
        )));
    }

    let total_duration = selection.total_duration(&catalog);
    let total_price = selection.total_price(&catalog);

    // Verify the requested slot is still in the availability set.
    let settings = load_shop_settings(&state).await?;
    let blocking = blocking_appointments(&state, payload.date).await?;
    let available = compute_availability(&settings, &blocking, payload.date, total_duration);
    if !available.contains(&payload.time) {
        return Err(AppError(BookingError::Conflict(format!(
            "Slot {} on {} is not available",
            payload.time, payload.date
        ))));
    }

    let db_appointment = barberbook_db::repositories::appointment::create_appointment(
        &state.db_pool,
        barberbook_db::repositories::appointment::NewAppointment {
            client_id: payload.client_id,
            client_name: payload.client_name,
            services: line_items,
            total_price,
            total_duration,
            date: payload.date,
            time: payload.time,
            barber_id: payload.barber_id,
            notes: payload.notes.unwrap_or_default(),
            status: AppointmentStatus::Pending,
        },
    )
    .await
    .map_err(BookingError::Database)?;

    let appointment = Appointment::try_from(db_appointment)?;
    Ok(Json(CreateAppointmentResponse {
        id: appointment.id,
        date: appointment.date,
        time: appointment.time,
        total_price: appointment.total_price,
        total_duration: appointment.total_duration,
        status: appointment.status,
        created_at: appointment.created_at,
    }))
}

/// Query parameters for listing appointments.
///
/// Either `date` (optionally narrowed by `status`) or `client_id` must
/// be provided.
#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    pub client_id: Option<String>,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = match (query.date, query.client_id) {
        (Some(date), None) => {
            // Default to the slot-blocking statuses, matching what the
            // booking calendar asks for.
            let statuses = match query.status {
                Some(status) => vec![status],
                None => vec![AppointmentStatus::Confirmed, AppointmentStatus::Pending],
            };
            barberbook_db::repositories::appointment::get_appointments_by_date(
                &state.db_pool,
                date,
                &statuses,
            )
            .await
            .map_err(BookingError::Database)?
        }
        (None, Some(client_id)) => {
            barberbook_db::repositories::appointment::get_appointments_by_client(
                &state.db_pool,
                &client_id,
            )
            .await
            .map_err(BookingError::Database)?
        }
        _ => {
            return Err(AppError(BookingError::Validation(
                "Provide either a date or a client_id".to_string(),
            )));
        }
    };

    let appointments = rows
        .into_iter()
        .map(Appointment::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let row = barberbook_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    Ok(Json(Appointment::try_from(row)?))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let row = barberbook_db::repositories::appointment::update_appointment_status(
        &state.db_pool,
        id,
        payload.status,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    Ok(Json(Appointment::try_from(row)?))
}

/// The day's blocking appointments, with unconvertible rows skipped.
pub(crate) async fn blocking_appointments(
    state: &ApiState,
    date: NaiveDate,
) -> Result<Vec<Appointment>, AppError> {
    let rows = barberbook_db::repositories::appointment::get_blocking_appointments_by_date(
        &state.db_pool,
        date,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(rows
        .into_iter()
        .filter_map(|row| Appointment::try_from(row).ok())
        .collect())
}
