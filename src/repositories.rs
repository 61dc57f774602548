use crate::errors::{AppError, ResultExt};
use crate::models::{Breed, Contact, Pet};
use sqlx::PgPool;
use uuid::Uuid;

/// Data access for the `contacts` table.
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        hub_spot_id: &str,
    ) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (id, name, email, hub_spot_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(hub_spot_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert contact")
    }
}

/// Data access for the `breeds` table.
///
/// A row is inserted per pet creation; repeated names are not deduplicated.
pub struct BreedRepository {
    pool: PgPool,
}

impl BreedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<Breed, AppError> {
        sqlx::query_as::<_, Breed>(
            "INSERT INTO breeds (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert breed")
    }

    pub async fn rename(&self, id: Uuid, name: &str) -> Result<Option<Breed>, AppError> {
        sqlx::query_as::<_, Breed>(
            "UPDATE breeds SET name = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to rename breed")
    }
}

/// Data access for the `pets` table.
pub struct PetRepository {
    pool: PgPool,
}

impl PetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        age: i32,
        breed_id: Uuid,
        contact_id: Uuid,
        hub_spot_id: &str,
    ) -> Result<Pet, AppError> {
        sqlx::query_as::<_, Pet>(
            "INSERT INTO pets (id, name, age, breed_id, contact_id, hub_spot_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(age)
        .bind(breed_id)
        .bind(contact_id)
        .bind(hub_spot_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert pet")
    }

    /// Returns one page of pets (oldest first) plus the total row count.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<(Vec<Pet>, i64), AppError> {
        let offset = (page - 1) * page_size;

        let items = sqlx::query_as::<_, Pet>(
            "SELECT * FROM pets ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pets")?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count pets")?;

        Ok((items, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, AppError> {
        sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch pet")
    }

    /// Applies a partial update. Absent fields keep their stored value.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        age: Option<i32>,
    ) -> Result<Option<Pet>, AppError> {
        sqlx::query_as::<_, Pet>(
            "UPDATE pets SET name = COALESCE($2, name), age = COALESCE($3, age), \
             updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update pet")
    }

    /// Deletes a pet by id; returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete pet")?;

        Ok(result.rows_affected() > 0)
    }
}
