use crate::models::DbService;
use barberbook_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    request: &CreateServiceRequest,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, is_package, price, duration, description, enabled, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, is_package, price, duration, description, enabled, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(request.is_package)
    .bind(request.price)
    .bind(request.duration)
    .bind(&request.description)
    .bind(request.enabled)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, is_package, price, duration, description, enabled, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

/// The service catalog; `only_enabled` restricts to bookable services.
pub async fn get_services(pool: &Pool<Postgres>, only_enabled: bool) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, is_package, price, duration, description, enabled, created_at
        FROM services
        WHERE enabled OR NOT $1
        ORDER BY name ASC
        "#,
    )
    .bind(only_enabled)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateServiceRequest,
) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = COALESCE($2, name),
            is_package = COALESCE($3, is_package),
            price = COALESCE($4, price),
            duration = COALESCE($5, duration),
            description = COALESCE($6, description),
            enabled = COALESCE($7, enabled)
        WHERE id = $1
        RETURNING id, name, is_package, price, duration, description, enabled, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(request.is_package)
    .bind(request.price)
    .bind(request.duration)
    .bind(&request.description)
    .bind(request.enabled)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
