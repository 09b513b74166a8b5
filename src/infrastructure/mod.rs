use async_trait::async_trait;

use crate::domain::{dog::Dog, errors::DomainError, query::DogQuery};

pub mod collection;
pub mod in_memory_dog_repository;

/// Persistence seam for dog records. Query execution applies, in fixed order,
/// predicate filter, stable sort and page window; writes are staged by
/// `insert` and become visible only on `commit`.
#[async_trait]
pub trait DogRepository: Send + Sync {
    async fn query(&self, query: DogQuery) -> Result<Vec<Dog>, DomainError>;
    async fn insert(&self, dog: Dog) -> Result<(), DomainError>;
    async fn commit(&self) -> Result<u64, DomainError>;
}
