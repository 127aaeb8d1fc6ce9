use std::collections::HashMap;

use barberbook_api::handlers::availability::compute_availability;
use barberbook_api::middleware::error_handling::AppError;
use barberbook_core::errors::BookingError;
use barberbook_core::models::service::{AppointmentService, Service, ServiceSelection};
use barberbook_core::models::shop::ShopSettings;
use barberbook_db::mock::repositories::MockServiceRepo;
use barberbook_db::models::DbService;
use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn db_service(id: Uuid, name: &str, price: i64, duration: i64) -> DbService {
    DbService {
        id,
        name: name.to_string(),
        is_package: false,
        price,
        duration,
        description: None,
        enabled: true,
        created_at: Utc::now(),
    }
}

// Mirrors the selection-resolution step of the create-appointment
// handler against a mock catalog: resolve line items and totals, or
// reject selections the catalog cannot satisfy.
async fn resolve_selection(
    service_repo: &MockServiceRepo,
    selection: HashMap<Uuid, u32>,
) -> Result<(Vec<AppointmentService>, i64, i64), AppError> {
    if selection.is_empty() {
        return Err(AppError(BookingError::Validation(
            "At least one service must be selected".to_string(),
        )));
    }

    let catalog: Vec<Service> = service_repo
        .get_services(true)
        .await?
        .into_iter()
        .map(Service::from)
        .collect();

    let selection = ServiceSelection(selection);
    let line_items = selection.line_items(&catalog);
    if line_items.len() != selection.0.len() {
        return Err(AppError(BookingError::Validation(
            "Selection contains unknown or disabled services".to_string(),
        )));
    }

    let total_duration = selection.total_duration(&catalog);
    let total_price = selection.total_price(&catalog);
    Ok((line_items, total_duration, total_price))
}

#[tokio::test]
async fn test_empty_selection_is_rejected() {
    let service_repo = MockServiceRepo::new();

    let result = resolve_selection(&service_repo, HashMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError(BookingError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_unknown_service_is_rejected() {
    let mut service_repo = MockServiceRepo::new();
    let cut_id = Uuid::new_v4();
    service_repo
        .expect_get_services()
        .returning(move |_| Ok(vec![db_service(cut_id, "Haircut", 800, 30)]));

    let mut selection = HashMap::new();
    selection.insert(Uuid::new_v4(), 1);

    let result = resolve_selection(&service_repo, selection).await;

    assert!(matches!(
        result,
        Err(AppError(BookingError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_selection_resolves_line_items_and_totals() {
    let mut service_repo = MockServiceRepo::new();
    let cut_id = Uuid::new_v4();
    let shave_id = Uuid::new_v4();
    service_repo.expect_get_services().returning(move |_| {
        Ok(vec![
            db_service(cut_id, "Haircut", 800, 30),
            db_service(shave_id, "Shave", 400, 15),
        ])
    });

    let mut selection = HashMap::new();
    selection.insert(cut_id, 2);
    selection.insert(shave_id, 1);

    let (line_items, total_duration, total_price) =
        resolve_selection(&service_repo, selection)
            .await
            .expect("selection should resolve");

    assert_eq!(line_items.len(), 2);
    assert_eq!(total_duration, 2 * 30 + 15);
    assert_eq!(total_price, 2 * 800 + 400);
}

#[test]
fn test_requested_slot_must_be_in_availability_set() {
    // The conflict check the create handler runs before inserting.
    let date = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
    let settings = ShopSettings::default();

    let available = compute_availability(&settings, &[], date, 540 + 30);

    // Nothing fits, so any requested time is a conflict.
    assert_eq!(available, Vec::<String>::new());
    assert!(!available.contains(&"9:00 AM".to_string()));
}
