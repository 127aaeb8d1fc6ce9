//! # Availability Handlers
//!
//! This module answers the booking form's central question: which start
//! times are still free on a given day?
//!
//! ## Slot Availability Algorithm
//!
//! The computation combines three inputs:
//!
//! 1. The shop's opening and closing times, which define the full
//!    candidate slot list at 30-minute granularity
//! 2. The day's blocking appointments (status `confirmed` or `pending`),
//!    each occupying a `[start, start + total_duration)` interval
//! 3. The requested total duration, the sum of the durations of the
//!    services the client is about to book
//!
//! A slot survives only if the new booking would end by closing time and
//! would overlap no existing interval. A zero duration (no services
//! selected yet) returns the full candidate list so the form can still
//! render options.
//!
//! The heavy lifting is the pure functions in
//! `barberbook_core::availability`; this handler only fetches the inputs
//! and serializes the output.

use axum::{
    extract::{Query, State},
    Json,
};
use barberbook_core::availability::{available_time_slots, booked_intervals, generate_time_slots};
use barberbook_core::errors::BookingError;
use barberbook_core::models::{appointment::Appointment, shop::ShopSettings};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::handlers::settings::load_shop_settings;
use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability endpoint.
///
/// # Fields
///
/// * `date` - Candidate calendar date (ISO `YYYY-MM-DD`)
/// * `duration` - Requested booking length in minutes (default: 0,
///   meaning "show every slot")
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Candidate date to compute slots for
    pub date: NaiveDate,

    /// Total duration of the selected services, in minutes
    pub duration: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    /// Bookable start times in chronological order, e.g. "9:00 AM"
    pub slots: Vec<String>,
}

/// Computes the bookable slot labels for one day.
///
/// Pure composition of the core calculator, shared by the HTTP handler
/// and the appointment-creation conflict check.
pub fn compute_availability(
    settings: &ShopSettings,
    blocking: &[Appointment],
    date: NaiveDate,
    total_duration: i64,
) -> Vec<String> {
    let all_slots = generate_time_slots(&settings.opening_time, &settings.closing_time);
    let intervals = booked_intervals(blocking);
    available_time_slots(
        date,
        &all_slots,
        &intervals,
        total_duration,
        &settings.closing_time,
    )
}

/// Returns the available time slots for a date.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?date=2025-10-27&duration=90
/// ```
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let total_duration = query.duration.unwrap_or(0);
    if total_duration < 0 {
        return Err(AppError(BookingError::Validation(
            "Duration must not be negative".to_string(),
        )));
    }

    let settings = load_shop_settings(&state).await?;
    let blocking = crate::handlers::appointment::blocking_appointments(&state, query.date).await?;

    let slots = compute_availability(&settings, &blocking, query.date, total_duration);

    Ok(Json(AvailabilityResponse {
        date: query.date,
        slots,
    }))
}
