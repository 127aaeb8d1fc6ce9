use crate::models::DbAppointment;
use barberbook_core::models::appointment::AppointmentStatus;
use barberbook_core::models::service::AppointmentService;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fields of a not-yet-persisted appointment. Ids and timestamps are
/// assigned here.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub client_id: String,
    pub client_name: Option<String>,
    pub services: Vec<AppointmentService>,
    pub total_price: i64,
    pub total_duration: i64,
    pub date: NaiveDate,
    pub time: String,
    pub barber_id: Option<Uuid>,
    pub notes: String,
    pub status: AppointmentStatus,
}

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    new: NewAppointment,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (
            id, client_id, client_name, services, total_price, total_duration,
            date, time, barber_id, notes, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, client_id, client_name, services, total_price, total_duration,
                  date, time, barber_id, notes, status, created_at
        "#,
    )
    .bind(id)
    .bind(&new.client_id)
    .bind(&new.client_name)
    .bind(Json(&new.services))
    .bind(new.total_price)
    .bind(new.total_duration)
    .bind(new.date)
    .bind(&new.time)
    .bind(new.barber_id)
    .bind(&new.notes)
    .bind(new.status.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, client_name, services, total_price, total_duration,
               date, time, barber_id, notes, status, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Appointments on `date` whose status is in `statuses`.
///
/// This is the availability query: the booking calendar asks for the
/// day's `confirmed` and `pending` appointments and nothing else.
pub async fn get_appointments_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    statuses: &[AppointmentStatus],
) -> Result<Vec<DbAppointment>> {
    let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, client_name, services, total_price, total_duration,
               date, time, barber_id, notes, status, created_at
        FROM appointments
        WHERE date = $1 AND status = ANY($2)
        ORDER BY created_at ASC
        "#,
    )
    .bind(date)
    .bind(&statuses)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// The day's slot-blocking appointments (`confirmed` or `pending`).
pub async fn get_blocking_appointments_by_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    get_appointments_by_date(
        pool,
        date,
        &[AppointmentStatus::Confirmed, AppointmentStatus::Pending],
    )
    .await
}

pub async fn get_appointments_by_client(
    pool: &Pool<Postgres>,
    client_id: &str,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, client_name, services, total_price, total_duration,
               date, time, barber_id, notes, status, created_at
        FROM appointments
        WHERE client_id = $1
        ORDER BY date DESC, created_at DESC
        "#,
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1
        RETURNING id, client_id, client_name, services, total_price, total_duration,
                  date, time, barber_id, notes, status, created_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}
