use sqlx::{postgres::PgPoolOptions, PgPool};

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        // Connectivity probe before the server starts accepting requests
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Creates the contacts/breeds/pets tables if they do not exist yet.
    ///
    /// This is a startup bootstrap, not a migration engine: columns are never
    /// altered once created.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                hub_spot_id TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS breeds (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pets (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                breed_id UUID NOT NULL REFERENCES breeds(id),
                contact_id UUID NOT NULL REFERENCES contacts(id),
                hub_spot_id TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes every row from every table. Test setup/teardown only.
    pub async fn erase_records(&self) -> anyhow::Result<()> {
        sqlx::query("TRUNCATE pets, contacts, breeds")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
