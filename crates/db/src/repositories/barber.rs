use crate::models::DbBarber;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_barber(pool: &Pool<Postgres>, name: &str) -> Result<DbBarber> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        INSERT INTO barbers (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(barber)
}

pub async fn get_barber_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBarber>> {
    let barber = sqlx::query_as::<_, DbBarber>(
        r#"
        SELECT id, name, created_at
        FROM barbers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(barber)
}

pub async fn get_barbers(pool: &Pool<Postgres>) -> Result<Vec<DbBarber>> {
    let barbers = sqlx::query_as::<_, DbBarber>(
        r#"
        SELECT id, name, created_at
        FROM barbers
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(barbers)
}

pub async fn delete_barber(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM barbers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
