use tokio::sync::RwLock;

use async_trait::async_trait;

use crate::{
    domain::{dog::Dog, errors::DomainError, query::DogQuery},
    infrastructure::{DogRepository, collection::DogCollection},
};

/// Repository backed by the in-memory collection. The collection is owned
/// exclusively here; queries take a read lock, staging and commits a write
/// lock, and those lock acquisitions are the only suspension points.
#[derive(Default)]
pub struct InMemoryDogRepository {
    collection: RwLock<DogCollection>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup seeding, idempotent by key. Returns how many rows were
    /// installed.
    pub async fn seed_initial_dogs(&self) -> u64 {
        self.collection.write().await.seed(initial_dogs())
    }
}

fn initial_dogs() -> [Dog; 2] {
    [
        Dog::new("Neo", "red & amber", 22, 32),
        Dog::new("Jessy", "black & white", 7, 14),
    ]
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn query(&self, query: DogQuery) -> Result<Vec<Dog>, DomainError> {
        query.validate()?;

        let mut dogs = self.collection.read().await.scan();

        if let Some(predicate) = &query.predicate {
            dogs.retain(|dog| predicate(dog));
        }

        if let Some(sort) = &query.sort {
            // Vec::sort_by is stable, so equal keys keep their original
            // relative order in both directions.
            dogs.sort_by(|left, right| sort.compare(left, right));
        }

        if let Some(page) = &query.page {
            dogs = dogs
                .into_iter()
                .skip(page.offset())
                .take(page.limit())
                .collect();
        }

        Ok(dogs)
    }

    async fn insert(&self, dog: Dog) -> Result<(), DomainError> {
        if !dog.is_valid() {
            return Err(DomainError::validation("Invalid dog model"));
        }
        self.collection.write().await.stage(dog);
        Ok(())
    }

    async fn commit(&self) -> Result<u64, DomainError> {
        let applied = self.collection.write().await.commit()?;
        Ok(applied)
    }
}
