use std::collections::HashMap;
use std::str::FromStr;

use barberbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    barber::Barber,
    service::{AppointmentService, Service, ServiceSelection},
    shop::ShopSettings,
};
use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn haircut(id: Uuid) -> Service {
    Service {
        id,
        name: "Haircut".to_string(),
        is_package: false,
        price: 800,
        duration: 30,
        description: Some("Classic cut".to_string()),
        enabled: true,
    }
}

#[test]
fn test_service_serialization() {
    let service = haircut(Uuid::new_v4());

    let json = to_string(&service).expect("Failed to serialize service");
    let deserialized: Service = from_str(&json).expect("Failed to deserialize service");

    assert_eq!(deserialized.id, service.id);
    assert_eq!(deserialized.name, service.name);
    assert_eq!(deserialized.price, service.price);
    assert_eq!(deserialized.duration, service.duration);
    assert_eq!(deserialized.enabled, service.enabled);
}

#[rstest]
#[case(AppointmentStatus::Pending, "pending")]
#[case(AppointmentStatus::Confirmed, "confirmed")]
#[case(AppointmentStatus::Completed, "completed")]
#[case(AppointmentStatus::Cancelled, "cancelled")]
#[case(AppointmentStatus::NoShow, "no-show")]
fn test_appointment_status_labels(#[case] status: AppointmentStatus, #[case] label: &str) {
    assert_eq!(status.as_str(), label);
    assert_eq!(to_string(&status).unwrap(), format!("\"{}\"", label));
    assert_eq!(AppointmentStatus::from_str(label).unwrap(), status);
}

#[test]
fn test_appointment_status_rejects_unknown_label() {
    assert!(AppointmentStatus::from_str("rescheduled").is_err());
}

#[rstest]
#[case(AppointmentStatus::Pending, true)]
#[case(AppointmentStatus::Confirmed, true)]
#[case(AppointmentStatus::Completed, false)]
#[case(AppointmentStatus::Cancelled, false)]
#[case(AppointmentStatus::NoShow, false)]
fn test_blocking_statuses(#[case] status: AppointmentStatus, #[case] blocks: bool) {
    assert_eq!(status.blocks_slots(), blocks);
}

#[test]
fn test_service_selection_totals() {
    let cut_id = Uuid::new_v4();
    let shave_id = Uuid::new_v4();
    let services = vec![
        haircut(cut_id),
        Service {
            id: shave_id,
            name: "Shave".to_string(),
            is_package: false,
            price: 400,
            duration: 15,
            description: None,
            enabled: true,
        },
    ];

    let mut selection = HashMap::new();
    selection.insert(cut_id, 2);
    selection.insert(shave_id, 1);
    let selection = ServiceSelection(selection);

    assert_eq!(selection.total_duration(&services), 2 * 30 + 15);
    assert_eq!(selection.total_price(&services), 2 * 800 + 400);
}

#[test]
fn test_service_selection_ignores_unknown_ids() {
    let cut_id = Uuid::new_v4();
    let services = vec![haircut(cut_id)];

    let mut selection = HashMap::new();
    selection.insert(cut_id, 1);
    selection.insert(Uuid::new_v4(), 5);
    let selection = ServiceSelection(selection);

    assert_eq!(selection.total_duration(&services), 30);
    assert_eq!(selection.total_price(&services), 800);
    assert_eq!(selection.line_items(&services).len(), 1);
}

#[test]
fn test_service_selection_line_items_freeze_catalog_values() {
    let cut_id = Uuid::new_v4();
    let services = vec![haircut(cut_id)];

    let mut selection = HashMap::new();
    selection.insert(cut_id, 3);
    let selection = ServiceSelection(selection);

    let items = selection.line_items(&services);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].service_id, cut_id);
    assert_eq!(items[0].name, "Haircut");
    assert_eq!(items[0].price, 800);
    assert_eq!(items[0].duration, 30);
    assert_eq!(items[0].quantity, 3);
}

#[test]
fn test_appointment_serialization() {
    let appointment = Appointment {
        id: Uuid::new_v4(),
        client_id: "client-42".to_string(),
        client_name: Some("Walk-in Client".to_string()),
        services: vec![AppointmentService {
            service_id: Uuid::new_v4(),
            name: "Haircut".to_string(),
            price: 800,
            duration: 30,
            quantity: 1,
        }],
        total_price: 800,
        total_duration: 30,
        date: NaiveDate::from_ymd_opt(2025, 10, 27).unwrap(),
        time: "9:30 AM".to_string(),
        barber_id: None,
        notes: "First visit".to_string(),
        status: AppointmentStatus::Pending,
        created_at: Utc::now(),
    };

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    let deserialized: Appointment = from_str(&json).expect("Failed to deserialize appointment");

    assert_eq!(deserialized.id, appointment.id);
    assert_eq!(deserialized.client_id, appointment.client_id);
    assert_eq!(deserialized.services.len(), appointment.services.len());
    assert_eq!(deserialized.date, appointment.date);
    assert_eq!(deserialized.time, appointment.time);
    assert_eq!(deserialized.status, appointment.status);
}

#[test]
fn test_shop_settings_defaults() {
    let settings = ShopSettings::default();

    assert_eq!(settings.opening_time, "09:00");
    assert_eq!(settings.closing_time, "18:00");
}

#[test]
fn test_barber_serialization() {
    let barber = Barber {
        id: Uuid::new_v4(),
        name: "Ali".to_string(),
    };

    let json = to_string(&barber).expect("Failed to serialize barber");
    let deserialized: Barber = from_str(&json).expect("Failed to deserialize barber");

    assert_eq!(deserialized.id, barber.id);
    assert_eq!(deserialized.name, barber.name);
}
