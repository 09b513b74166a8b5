use std::sync::Arc;

use crate::{
    application::dto::{CreateDogRequest, DogResponse, ListDogsRequest},
    domain::{errors::DomainError, query::DogQuery},
    infrastructure::DogRepository,
};

#[derive(Clone)]
pub struct DogService {
    repository: Arc<dyn DogRepository>,
}

impl DogService {
    pub fn new(repository: Arc<dyn DogRepository>) -> Self {
        Self { repository }
    }

    /// List records with the caller's sort and page parameters. The attribute
    /// defaults to `name`, the direction to ascending; both are resolved and
    /// validated before storage is touched.
    pub async fn list_dogs(
        &self,
        request: ListDogsRequest,
    ) -> Result<Vec<DogResponse>, DomainError> {
        let query = request.into_query()?;
        query.validate()?;

        let dogs = self.repository.query(query).await?;
        Ok(dogs.into_iter().map(DogResponse::from).collect())
    }

    /// Lookup by the natural key. `name` is unique by domain contract, so
    /// more than one match is a storage integrity violation and fails loudly
    /// rather than being silently resolved to the first row.
    pub async fn get_dog_by_name(&self, name: &str) -> Result<Option<DogResponse>, DomainError> {
        if name.is_empty() {
            return Err(DomainError::validation("Invalid name parameter"));
        }

        let wanted = name.to_string();
        let query = DogQuery::new().with_predicate(move |dog| dog.name == wanted);

        let mut matches = self.repository.query(query).await?;
        if matches.len() > 1 {
            return Err(DomainError::internal(format!(
                "dog name '{name}' is not unique in storage"
            )));
        }

        Ok(matches.pop().map(DogResponse::from))
    }

    /// Validates the candidate, checks the key fast-path, then stages and
    /// commits. The collection's unique index is the authoritative guard
    /// against concurrent creates of the same name; a commit-time conflict is
    /// reported exactly like a fast-path hit.
    pub async fn create_dog(&self, request: CreateDogRequest) -> Result<DogResponse, DomainError> {
        let dog = request.into_dog();
        if !dog.is_valid() {
            return Err(DomainError::validation("Invalid dog model"));
        }

        if self.get_dog_by_name(&dog.name).await?.is_some() {
            return Err(already_exists(&dog.name));
        }

        self.repository.insert(dog.clone()).await?;
        match self.repository.commit().await {
            Ok(_) => Ok(DogResponse::from(dog)),
            Err(DomainError::Conflict(_)) => Err(already_exists(&dog.name)),
            Err(other) => Err(other),
        }
    }
}

fn already_exists(name: &str) -> DomainError {
    DomainError::conflict(format!("Dog with name {name} already exists"))
}
