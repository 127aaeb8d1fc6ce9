use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/barbers", post(handlers::barber::create_barber))
        .route("/api/barbers", get(handlers::barber::list_barbers))
        .route("/api/barbers/:id", delete(handlers::barber::delete_barber))
}
