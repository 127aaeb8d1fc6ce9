use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            is_package BOOLEAN NOT NULL DEFAULT FALSE,
            price BIGINT NOT NULL,
            duration BIGINT NOT NULL,
            description TEXT NULL,
            enabled BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duration CHECK (duration > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create barbers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            client_id VARCHAR(255) NOT NULL,
            client_name VARCHAR(255) NULL,
            services JSONB NOT NULL DEFAULT '[]',
            total_price BIGINT NOT NULL,
            total_duration BIGINT NOT NULL,
            date DATE NOT NULL,
            time VARCHAR(16) NOT NULL,
            barber_id UUID NULL REFERENCES barbers(id) ON DELETE SET NULL,
            notes TEXT NOT NULL DEFAULT '',
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_status CHECK (
                status IN ('pending', 'confirmed', 'completed', 'cancelled', 'no-show')
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shop_settings table (single row, id fixed at 1)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shop_settings (
            id INT PRIMARY KEY CHECK (id = 1),
            opening_time VARCHAR(5) NOT NULL DEFAULT '09:00',
            closing_time VARCHAR(5) NOT NULL DEFAULT '18:00',
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per call; the prepared-statement
    // path rejects multi-command strings.
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_status ON appointments(status)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_client_id ON appointments(client_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_barber_id ON appointments(barber_id)",
        "CREATE INDEX IF NOT EXISTS idx_services_enabled ON services(enabled)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
