use crate::models::DbShopSettings;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

// The settings table holds a single row keyed by id = 1.
const SETTINGS_ROW_ID: i32 = 1;

pub async fn get_shop_settings(pool: &Pool<Postgres>) -> Result<Option<DbShopSettings>> {
    let settings = sqlx::query_as::<_, DbShopSettings>(
        r#"
        SELECT id, opening_time, closing_time, updated_at
        FROM shop_settings
        WHERE id = $1
        "#,
    )
    .bind(SETTINGS_ROW_ID)
    .fetch_optional(pool)
    .await?;

    Ok(settings)
}

pub async fn upsert_shop_settings(
    pool: &Pool<Postgres>,
    opening_time: &str,
    closing_time: &str,
) -> Result<DbShopSettings> {
    let now = Utc::now();

    let settings = sqlx::query_as::<_, DbShopSettings>(
        r#"
        INSERT INTO shop_settings (id, opening_time, closing_time, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE
        SET opening_time = EXCLUDED.opening_time,
            closing_time = EXCLUDED.closing_time,
            updated_at = EXCLUDED.updated_at
        RETURNING id, opening_time, closing_time, updated_at
        "#,
    )
    .bind(SETTINGS_ROW_ID)
    .bind(opening_time)
    .bind(closing_time)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(settings)
}
