use axum::{extract::State, Json};
use barberbook_core::availability::parse_shop_time;
use barberbook_core::errors::BookingError;
use barberbook_core::models::shop::{ShopSettings, UpdateShopSettingsRequest};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Fetches the shop settings, falling back to the default hours when
/// nothing has been configured yet.
pub(crate) async fn load_shop_settings(state: &ApiState) -> Result<ShopSettings, AppError> {
    let settings = barberbook_db::repositories::shop_settings::get_shop_settings(&state.db_pool)
        .await
        .map_err(BookingError::Database)?
        .map(ShopSettings::from)
        .unwrap_or_default();

    Ok(settings)
}

#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ShopSettings>, AppError> {
    let settings = load_shop_settings(&state).await?;
    Ok(Json(settings))
}

#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateShopSettingsRequest>,
) -> Result<Json<ShopSettings>, AppError> {
    // Merge the partial update over what is currently configured.
    let current = load_shop_settings(&state).await?;
    let opening_time = payload.opening_time.unwrap_or(current.opening_time);
    let closing_time = payload.closing_time.unwrap_or(current.closing_time);

    // Reject times the slot generator could not work with; a typo here
    // would otherwise silently close the shop.
    for value in [&opening_time, &closing_time] {
        if parse_shop_time(value).is_none() {
            return Err(AppError(BookingError::Validation(format!(
                "Invalid shop time {:?}; expected HH:MM",
                value
            ))));
        }
    }

    let updated = barberbook_db::repositories::shop_settings::upsert_shop_settings(
        &state.db_pool,
        &opening_time,
        &closing_time,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(ShopSettings::from(updated)))
}
