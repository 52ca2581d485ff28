//! The persistence gateway: sole owner of the animal collection.
//!
//! [`AnimalStore`] dispatches over the concrete backends with an enum
//! rather than a trait object, since async methods are not
//! dyn-compatible. Lookups take the raw textual id as it arrived from the
//! outside world and report a malformed value as [`DbError::InvalidId`],
//! except [`AnimalStore::delete_by_id`], which treats a malformed or
//! unknown id as a no-op.

use menagerie_types::{Animal, AnimalId, AnimalInput, AnimalPatch};

use crate::animal_store::PgAnimalStore;
use crate::error::DbError;
use crate::memory::MemoryAnimalStore;
use crate::postgres::{PostgresConfig, PostgresPool};

/// Handle to the animal collection. Cloning is cheap and shares state.
#[derive(Clone)]
pub enum AnimalStore {
    /// Durable `PostgreSQL` backend.
    Postgres(PgAnimalStore),
    /// Process-local backend.
    Memory(MemoryAnimalStore),
}

impl AnimalStore {
    /// Connect to `PostgreSQL` and apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or a migration fails.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DbError> {
        let pool = PostgresPool::connect(config).await?;
        pool.run_migrations().await?;
        Ok(Self::Postgres(PgAnimalStore::new(pool)))
    }

    /// Create an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryAnimalStore::new())
    }

    /// Human-readable backend name for logging.
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Remove every record. Succeeds on an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the backend rejects the delete.
    pub async fn delete_all(&self) -> Result<(), DbError> {
        let removed = match self {
            Self::Postgres(store) => store.delete_all().await?,
            Self::Memory(store) => store.delete_all().await,
        };
        tracing::info!(removed, "Deleted all animals");
        Ok(())
    }

    /// Insert each record with a fresh id and return the created records.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the backend rejects a write. The
    /// `PostgreSQL` backend inserts the batch atomically.
    pub async fn create_many(&self, records: Vec<AnimalInput>) -> Result<Vec<Animal>, DbError> {
        let created = match self {
            Self::Postgres(store) => store.create_many(records).await?,
            Self::Memory(store) => store.create_many(records).await,
        };
        tracing::info!(count = created.len(), "Created animals");
        Ok(created)
    }

    /// Insert one record and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the backend rejects the write.
    pub async fn create(&self, record: AnimalInput) -> Result<Animal, DbError> {
        let animal = match self {
            Self::Postgres(store) => store.create(record).await?,
            Self::Memory(store) => store.create(record).await,
        };
        tracing::debug!(id = %animal.id, species = %animal.species, "Created animal");
        Ok(animal)
    }

    /// Return all records. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_all(&self) -> Result<Vec<Animal>, DbError> {
        match self {
            Self::Postgres(store) => store.find_all().await,
            Self::Memory(store) => Ok(store.find_all().await),
        }
    }

    /// Look up one record by its textual id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidId`] if `id` is malformed, or
    /// [`DbError::Postgres`] if the query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Animal>, DbError> {
        let id = AnimalId::parse(id)?;
        match self {
            Self::Postgres(store) => store.find_by_id(id).await,
            Self::Memory(store) => Ok(store.find_by_id(id).await),
        }
    }

    /// Apply an update to the identified record. Fields the patch leaves
    /// out keep their stored values.
    ///
    /// Returns `Ok(None)` if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidId`] if `id` is malformed, or
    /// [`DbError::Postgres`] if the update fails.
    pub async fn update_by_id(
        &self,
        id: &str,
        fields: AnimalPatch,
    ) -> Result<Option<Animal>, DbError> {
        let id = AnimalId::parse(id)?;
        let updated = match self {
            Self::Postgres(store) => store.update_by_id(id, fields).await?,
            Self::Memory(store) => store.update_by_id(id, fields).await,
        };
        tracing::debug!(%id, found = updated.is_some(), "Updated animal");
        Ok(updated)
    }

    /// Remove the identified record.
    ///
    /// A malformed or unknown id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the backend fails the delete.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), DbError> {
        let Ok(id) = AnimalId::parse(id) else {
            tracing::debug!(id, "Ignoring delete of malformed id");
            return Ok(());
        };
        let removed = match self {
            Self::Postgres(store) => store.delete_by_id(id).await?,
            Self::Memory(store) => store.delete_by_id(id).await,
        };
        tracing::debug!(%id, removed, "Deleted animal");
        Ok(())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn count(&self) -> Result<u64, DbError> {
        match self {
            Self::Postgres(store) => store.count().await,
            Self::Memory(store) => Ok(store.count().await),
        }
    }

    /// Release backend resources. Safe to call more than once.
    pub async fn close(&self) {
        match self {
            Self::Postgres(store) => store.close().await,
            Self::Memory(_) => tracing::info!("In-memory animal store closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use menagerie_types::{SEED_COUNT, seed_animals};

    use super::*;

    fn fox() -> AnimalInput {
        AnimalInput::new("fox", "forest", true, 8.0)
    }

    #[tokio::test]
    async fn seed_replaces_existing_records() {
        let store = AnimalStore::in_memory();
        let stale = store.create(fox()).await.unwrap();

        store.delete_all().await.unwrap();
        let created = store.create_many(seed_animals()).await.unwrap();

        assert_eq!(created.len(), SEED_COUNT);
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), SEED_COUNT);
        assert!(all.iter().all(|a| a.id != stale.id));
        for input in seed_animals() {
            assert!(all.iter().any(|a| a.to_input() == input), "missing {input:?}");
        }
    }

    #[tokio::test]
    async fn delete_all_on_empty_store_is_ok() {
        let store = AnimalStore::in_memory();
        store.delete_all().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_by_id_distinguishes_missing_from_malformed() {
        let store = AnimalStore::in_memory();
        let created = store.create(fox()).await.unwrap();

        let found = store.find_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.find_by_id(&AnimalId::new().to_string()).await.unwrap();
        assert!(missing.is_none());

        let malformed = store.find_by_id("zebra").await;
        assert!(matches!(malformed, Err(DbError::InvalidId(_))));
    }

    #[tokio::test]
    async fn update_preserves_identity() {
        let store = AnimalStore::in_memory();
        let created = store.create(fox()).await.unwrap();

        let fields = AnimalPatch {
            location: Some(String::from("tundra")),
            extinct: true,
            ..AnimalPatch::default()
        };
        let updated = store
            .update_by_id(&created.id.to_string(), fields)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.species, "fox");
        assert_eq!(updated.location, "tundra");
        assert_eq!(updated.life_expectancy, 8.0);
    }

    #[tokio::test]
    async fn update_rejects_malformed_id() {
        let store = AnimalStore::in_memory();
        let result = store.update_by_id("42", fox().into()).await;
        assert!(matches!(result, Err(DbError::InvalidId(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = AnimalStore::in_memory();
        let created = store.create(fox()).await.unwrap();

        store.delete_by_id(&AnimalId::new().to_string()).await.unwrap();
        store.delete_by_id("not-an-id").await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        let id = created.id.to_string();
        store.delete_by_id(&id).await.unwrap();
        store.delete_by_id(&id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn listing_reflects_mutations() {
        let store = AnimalStore::in_memory();
        let created = store.create(fox()).await.unwrap();
        let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|a| a.id).collect();
        assert!(ids.contains(&created.id));

        store.delete_by_id(&created.id.to_string()).await.unwrap();
        let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|a| a.id).collect();
        assert!(!ids.contains(&created.id));
    }

    #[test]
    fn backend_names() {
        assert_eq!(AnimalStore::in_memory().backend_name(), "memory");
    }
}
