//! `PostgreSQL`-backed operations on the `animals` table.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time checked)
//! to avoid requiring a live database at build time. All queries are
//! parameterized.

use menagerie_types::{Animal, AnimalId, AnimalInput, AnimalPatch};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::postgres::PostgresPool;

/// Columns selected by every read, in [`AnimalRow`] order.
const COLUMNS: &str = "id, species, location, extinct, life_expectancy";

/// Operations on the `animals` table.
#[derive(Clone)]
pub struct PgAnimalStore {
    pool: PostgresPool,
}

impl PgAnimalStore {
    /// Create a store bound to a connection pool.
    pub const fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }

    fn pg(&self) -> &PgPool {
        self.pool.pool()
    }

    /// Remove every record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM animals").execute(self.pg()).await?;
        Ok(result.rows_affected())
    }

    /// Insert a batch of records inside a single transaction.
    ///
    /// Either every record is inserted or none is.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any insert or the commit fails.
    pub async fn create_many(&self, records: Vec<AnimalInput>) -> Result<Vec<Animal>, DbError> {
        let mut tx = self.pg().begin().await?;
        let mut created = Vec::with_capacity(records.len());

        for input in records {
            let row = sqlx::query_as::<_, AnimalRow>(&insert_sql())
                .bind(AnimalId::new().into_inner())
                .bind(&input.species)
                .bind(&input.location)
                .bind(input.extinct)
                .bind(input.life_expectancy)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row.into());
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Insert one record and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn create(&self, input: AnimalInput) -> Result<Animal, DbError> {
        let row = sqlx::query_as::<_, AnimalRow>(&insert_sql())
            .bind(AnimalId::new().into_inner())
            .bind(&input.species)
            .bind(&input.location)
            .bind(input.extinct)
            .bind(input.life_expectancy)
            .fetch_one(self.pg())
            .await?;
        Ok(row.into())
    }

    /// Fetch every record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Animal>, DbError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!(
            "SELECT {COLUMNS} FROM animals ORDER BY id"
        ))
        .fetch_all(self.pg())
        .await?;
        Ok(rows.into_iter().map(Animal::from).collect())
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_by_id(&self, id: AnimalId) -> Result<Option<Animal>, DbError> {
        let row = sqlx::query_as::<_, AnimalRow>(&format!(
            "SELECT {COLUMNS} FROM animals WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pg())
        .await?;
        Ok(row.map(Animal::from))
    }

    /// Apply an update to a record. Absent patch fields keep their
    /// stored values.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn update_by_id(
        &self,
        id: AnimalId,
        patch: AnimalPatch,
    ) -> Result<Option<Animal>, DbError> {
        let row = sqlx::query_as::<_, AnimalRow>(&format!(
            "UPDATE animals
             SET species = COALESCE($2, species),
                 location = COALESCE($3, location),
                 extinct = $4,
                 life_expectancy = COALESCE($5, life_expectancy)
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(patch.species)
        .bind(patch.location)
        .bind(patch.extinct)
        .bind(patch.life_expectancy)
        .fetch_optional(self.pg())
        .await?;
        Ok(row.map(Animal::from))
    }

    /// Delete a record. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete_by_id(&self, id: AnimalId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pg())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn count(&self) -> Result<u64, DbError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM animals")
            .fetch_one(self.pg())
            .await?;
        Ok(u64::try_from(row.0).unwrap_or(0))
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO animals (id, species, location, extinct, life_expectancy)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    )
}

/// A row from the `animals` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnimalRow {
    /// Record UUID.
    pub id: Uuid,
    /// Species name.
    pub species: String,
    /// Habitat or region.
    pub location: String,
    /// Extinction flag.
    pub extinct: bool,
    /// Life expectancy in years.
    pub life_expectancy: f64,
}

impl From<AnimalRow> for Animal {
    fn from(row: AnimalRow) -> Self {
        Self {
            id: AnimalId::from(row.id),
            species: row.species,
            location: row.location,
            extinct: row.extinct,
            life_expectancy: row.life_expectancy,
        }
    }
}
