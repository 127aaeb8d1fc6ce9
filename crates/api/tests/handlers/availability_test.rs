use barberbook_api::handlers::availability::compute_availability;
use barberbook_api::middleware::error_handling::AppError;
use barberbook_core::models::appointment::{Appointment, AppointmentStatus};
use barberbook_core::models::shop::ShopSettings;
use barberbook_db::mock::repositories::{MockAppointmentRepo, MockShopSettingsRepo};
use barberbook_db::models::{DbAppointment, DbShopSettings};
use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use sqlx::types::Json;
use uuid::Uuid;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
}

fn db_appointment(time: &str, total_duration: i64, status: &str) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        client_id: "client-1".to_string(),
        client_name: None,
        services: Json(vec![]),
        total_price: 0,
        total_duration,
        date: test_date(),
        time: time.to_string(),
        barber_id: None,
        notes: String::new(),
        status: status.to_string(),
        created_at: Utc::now(),
    }
}

// Mirrors what the availability handler does between the repository and
// the core calculator, but against mock repositories.
async fn fetch_and_compute(
    settings_repo: &MockShopSettingsRepo,
    appointment_repo: &MockAppointmentRepo,
    date: NaiveDate,
    duration: i64,
) -> Result<Vec<String>, AppError> {
    let settings = settings_repo
        .get_shop_settings()
        .await?
        .map(ShopSettings::from)
        .unwrap_or_default();

    let rows = appointment_repo
        .get_blocking_appointments_by_date(date)
        .await?;
    let blocking: Vec<Appointment> = rows
        .into_iter()
        .filter_map(|row| Appointment::try_from(row).ok())
        .collect();

    Ok(compute_availability(&settings, &blocking, date, duration))
}

#[tokio::test]
async fn test_availability_uses_default_hours_when_unconfigured() {
    let mut settings_repo = MockShopSettingsRepo::new();
    let mut appointment_repo = MockAppointmentRepo::new();

    settings_repo
        .expect_get_shop_settings()
        .returning(|| Ok(None));
    appointment_repo
        .expect_get_blocking_appointments_by_date()
        .returning(|_| Ok(vec![]));

    let slots = fetch_and_compute(&settings_repo, &appointment_repo, test_date(), 30)
        .await
        .expect("availability should compute");

    assert_eq!(slots.len(), 18);
    assert_eq!(slots.first().unwrap(), "9:00 AM");
    assert_eq!(slots.last().unwrap(), "5:30 PM");
}

#[tokio::test]
async fn test_availability_respects_configured_hours() {
    let mut settings_repo = MockShopSettingsRepo::new();
    let mut appointment_repo = MockAppointmentRepo::new();

    settings_repo.expect_get_shop_settings().returning(|| {
        Ok(Some(DbShopSettings {
            id: 1,
            opening_time: "10:00".to_string(),
            closing_time: "12:00".to_string(),
            updated_at: Utc::now(),
        }))
    });
    appointment_repo
        .expect_get_blocking_appointments_by_date()
        .returning(|_| Ok(vec![]));

    let slots = fetch_and_compute(&settings_repo, &appointment_repo, test_date(), 30)
        .await
        .expect("availability should compute");

    assert_eq!(slots, vec!["10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM"]);
}

#[tokio::test]
async fn test_availability_excludes_booked_slots() {
    let mut settings_repo = MockShopSettingsRepo::new();
    let mut appointment_repo = MockAppointmentRepo::new();

    settings_repo
        .expect_get_shop_settings()
        .returning(|| Ok(None));
    appointment_repo
        .expect_get_blocking_appointments_by_date()
        .returning(|_| Ok(vec![db_appointment("10:00 AM", 60, "confirmed")]));

    let slots = fetch_and_compute(&settings_repo, &appointment_repo, test_date(), 30)
        .await
        .expect("availability should compute");

    assert!(!slots.contains(&"10:00 AM".to_string()));
    assert!(!slots.contains(&"10:30 AM".to_string()));
    assert!(slots.contains(&"9:30 AM".to_string()));
    assert!(slots.contains(&"11:00 AM".to_string()));
}

#[tokio::test]
async fn test_availability_skips_rows_with_invalid_status() {
    let mut settings_repo = MockShopSettingsRepo::new();
    let mut appointment_repo = MockAppointmentRepo::new();

    settings_repo
        .expect_get_shop_settings()
        .returning(|| Ok(None));
    // A row with a status the domain does not recognize cannot block
    // anything.
    appointment_repo
        .expect_get_blocking_appointments_by_date()
        .returning(|_| Ok(vec![db_appointment("10:00 AM", 60, "mystery")]));

    let slots = fetch_and_compute(&settings_repo, &appointment_repo, test_date(), 30)
        .await
        .expect("availability should compute");

    assert!(slots.contains(&"10:00 AM".to_string()));
    assert_eq!(slots.len(), 18);
}

#[test]
fn test_compute_availability_zero_duration_returns_every_slot() {
    let settings = ShopSettings::default();
    let blocking = vec![Appointment {
        id: Uuid::new_v4(),
        client_id: "client-1".to_string(),
        client_name: None,
        services: vec![],
        total_price: 0,
        total_duration: 60,
        date: test_date(),
        time: "10:00 AM".to_string(),
        barber_id: None,
        notes: String::new(),
        status: AppointmentStatus::Confirmed,
        created_at: Utc::now(),
    }];

    let slots = compute_availability(&settings, &blocking, test_date(), 0);

    assert_eq!(slots.len(), 18);
}
