use axum::{
    extract::{Path, Query, State},
    Json,
};
use barberbook_core::errors::BookingError;
use barberbook_core::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    if payload.duration <= 0 {
        return Err(AppError(BookingError::Validation(
            "Service duration must be positive".to_string(),
        )));
    }
    if payload.price < 0 {
        return Err(AppError(BookingError::Validation(
            "Service price must not be negative".to_string(),
        )));
    }

    let service = barberbook_db::repositories::service::create_service(&state.db_pool, &payload)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(Service::from(service)))
}

#[derive(Debug, Deserialize)]
pub struct ListServicesQuery {
    /// When true, only services that can currently be booked.
    pub enabled: Option<bool>,
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListServicesQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = barberbook_db::repositories::service::get_services(
        &state.db_pool,
        query.enabled.unwrap_or(false),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(Service::from).collect()))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    if matches!(payload.duration, Some(d) if d <= 0) {
        return Err(AppError(BookingError::Validation(
            "Service duration must be positive".to_string(),
        )));
    }

    let service =
        barberbook_db::repositories::service::update_service(&state.db_pool, id, &payload)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(Service::from(service)))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = barberbook_db::repositories::service::delete_service(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Service with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}
