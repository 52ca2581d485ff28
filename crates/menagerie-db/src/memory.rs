//! In-memory animal store.
//!
//! Holds records in a [`BTreeMap`] behind a [`RwLock`]. Used when no
//! database URL is configured and as the substitute store in tests.
//! Writes cannot fail.

use std::collections::BTreeMap;
use std::sync::Arc;

use menagerie_types::{Animal, AnimalId, AnimalInput, AnimalPatch};
use tokio::sync::RwLock;

/// In-memory store keyed by [`AnimalId`].
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryAnimalStore {
    animals: Arc<RwLock<BTreeMap<AnimalId, Animal>>>,
}

impl MemoryAnimalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every record, returning how many were removed.
    pub async fn delete_all(&self) -> u64 {
        let mut animals = self.animals.write().await;
        let removed = animals.len();
        animals.clear();
        u64::try_from(removed).unwrap_or(u64::MAX)
    }

    /// Insert a batch of records under one write lock.
    pub async fn create_many(&self, records: Vec<AnimalInput>) -> Vec<Animal> {
        let mut animals = self.animals.write().await;
        records
            .into_iter()
            .map(|input| {
                let animal = Animal::from_input(AnimalId::new(), input);
                animals.insert(animal.id, animal.clone());
                animal
            })
            .collect()
    }

    /// Insert one record.
    pub async fn create(&self, input: AnimalInput) -> Animal {
        let animal = Animal::from_input(AnimalId::new(), input);
        self.animals.write().await.insert(animal.id, animal.clone());
        animal
    }

    /// Snapshot of every record.
    pub async fn find_all(&self) -> Vec<Animal> {
        self.animals.read().await.values().cloned().collect()
    }

    /// Look up one record.
    pub async fn find_by_id(&self, id: AnimalId) -> Option<Animal> {
        self.animals.read().await.get(&id).cloned()
    }

    /// Apply an update to a record.
    pub async fn update_by_id(&self, id: AnimalId, patch: AnimalPatch) -> Option<Animal> {
        let mut animals = self.animals.write().await;
        let animal = animals.get_mut(&id)?;
        animal.apply(patch);
        Some(animal.clone())
    }

    /// Delete a record. Returns whether it existed.
    pub async fn delete_by_id(&self, id: AnimalId) -> bool {
        self.animals.write().await.remove(&id).is_some()
    }

    /// Number of stored records.
    pub async fn count(&self) -> u64 {
        u64::try_from(self.animals.read().await.len()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryAnimalStore::new();
        let a = store.create(AnimalInput::new("cat", "egypt", false, 10.0)).await;
        let b = store.create(AnimalInput::new("cat", "egypt", false, 10.0)).await;
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = MemoryAnimalStore::new();
        let result = store
            .update_by_id(AnimalId::new(), AnimalInput::new("x", "y", false, 1.0).into())
            .await;
        assert!(result.is_none());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryAnimalStore::new();
        let other = store.clone();
        store.create(AnimalInput::new("dog", "siberia", false, 11.0)).await;
        assert_eq!(other.count().await, 1);
        assert_eq!(other.delete_all().await, 1);
        assert_eq!(store.count().await, 0);
    }
}
