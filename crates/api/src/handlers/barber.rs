use axum::{
    extract::{Path, State},
    Json,
};
use barberbook_core::errors::BookingError;
use barberbook_core::models::barber::{Barber, CreateBarberRequest};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_barber(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBarberRequest>,
) -> Result<Json<Barber>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Barber name must not be empty".to_string(),
        )));
    }

    let barber = barberbook_db::repositories::barber::create_barber(&state.db_pool, &payload.name)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(Barber::from(barber)))
}

#[axum::debug_handler]
pub async fn list_barbers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Barber>>, AppError> {
    let barbers = barberbook_db::repositories::barber::get_barbers(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(barbers.into_iter().map(Barber::from).collect()))
}

#[axum::debug_handler]
pub async fn delete_barber(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = barberbook_db::repositories::barber::delete_barber(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Barber with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}
