use std::sync::Arc;

use dogshouse::application::{
    dog_service::DogService,
    dto::{CreateDogRequest, ListDogsRequest, SortDirectionRequest},
};
use dogshouse::domain::errors::DomainError;
use dogshouse::infrastructure::in_memory_dog_repository::InMemoryDogRepository;

async fn seeded_service() -> DogService {
    let repository = Arc::new(InMemoryDogRepository::new());
    repository.seed_initial_dogs().await;
    DogService::new(repository)
}

fn create_request(name: &str, color: &str, tail_length: i64, weight: i64) -> CreateDogRequest {
    CreateDogRequest {
        name: name.to_string(),
        color: color.to_string(),
        tail_length,
        weight,
    }
}

#[tokio::test]
async fn list_defaults_to_name_ascending() {
    let service = seeded_service().await;

    let dogs = service.list_dogs(ListDogsRequest::default()).await.unwrap();

    let names: Vec<_> = dogs.into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Jessy", "Neo"]);
}

#[tokio::test]
async fn list_sorts_by_the_requested_attribute_and_direction() {
    let service = seeded_service().await;

    let request = ListDogsRequest {
        attribute: Some("weight".to_string()),
        order: SortDirectionRequest::Desc,
        ..ListDogsRequest::default()
    };
    let dogs = service.list_dogs(request).await.unwrap();

    let weights: Vec<_> = dogs.into_iter().map(|d| d.weight).collect();
    assert_eq!(weights, vec![32, 14]);
}

#[tokio::test]
async fn list_applies_the_page_window() {
    let service = seeded_service().await;

    let request = ListDogsRequest {
        page_number: Some(2),
        page_size: Some(1),
        ..ListDogsRequest::default()
    };
    let dogs = service.list_dogs(request).await.unwrap();

    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].name, "Neo");
}

#[tokio::test]
async fn list_defaults_the_missing_pagination_half() {
    let service = seeded_service().await;

    // only pageSize given: page number falls back to 1
    let request = ListDogsRequest {
        page_size: Some(1),
        ..ListDogsRequest::default()
    };
    let dogs = service.list_dogs(request).await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].name, "Jessy");

    // only pageNumber given: page size is effectively unbounded
    let request = ListDogsRequest {
        page_number: Some(1),
        ..ListDogsRequest::default()
    };
    let dogs = service.list_dogs(request).await.unwrap();
    assert_eq!(dogs.len(), 2);
}

#[tokio::test]
async fn list_rejects_invalid_pagination() {
    let service = seeded_service().await;

    for (page_number, page_size) in [(0, 0), (0, -1), (-1, 0), (1, -1), (-1, 1)] {
        let request = ListDogsRequest {
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..ListDogsRequest::default()
        };
        let err = service.list_dogs(request).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(detail) if detail == "Invalid pagination parameter"
        ));
    }
}

#[tokio::test]
async fn list_rejects_unknown_and_empty_attributes() {
    let service = seeded_service().await;

    for attribute in ["invalid_attribute", ""] {
        let request = ListDogsRequest {
            attribute: Some(attribute.to_string()),
            ..ListDogsRequest::default()
        };
        let err = service.list_dogs(request).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(detail) if detail == "Invalid attribute parameter"
        ));
    }
}

#[tokio::test]
async fn get_by_name_returns_the_matching_record() {
    let service = seeded_service().await;

    let found = service.get_dog_by_name("Neo").await.unwrap().unwrap();
    assert_eq!(found.name, "Neo");
    assert_eq!(found.color, "red & amber");
    assert_eq!(found.tail_length, 22);
    assert_eq!(found.weight, 32);
}

#[tokio::test]
async fn get_by_name_is_absent_for_unknown_keys() {
    let service = seeded_service().await;
    assert!(service.get_dog_by_name("Ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn get_by_name_rejects_an_empty_key() {
    let service = seeded_service().await;

    let err = service.get_dog_by_name("").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(detail) if detail == "Invalid name parameter"
    ));
}

#[tokio::test]
async fn create_round_trips_through_list() {
    let service = seeded_service().await;

    let created = service
        .create_dog(create_request("Doggy", "red", 173, 33))
        .await
        .unwrap();
    assert_eq!(created.name, "Doggy");

    let dogs = service.list_dogs(ListDogsRequest::default()).await.unwrap();
    let found = dogs.iter().find(|d| d.name == "Doggy").unwrap();
    assert_eq!(found.color, "red");
    assert_eq!(found.tail_length, 173);
    assert_eq!(found.weight, 33);
}

#[tokio::test]
async fn create_rejects_a_duplicate_name_and_keeps_the_original() {
    let service = seeded_service().await;

    let err = service
        .create_dog(create_request("Neo", "grey", 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(detail) if detail == "Dog with name Neo already exists"
    ));

    let dogs = service.list_dogs(ListDogsRequest::default()).await.unwrap();
    let neos: Vec<_> = dogs.iter().filter(|d| d.name == "Neo").collect();
    assert_eq!(neos.len(), 1);
    assert_eq!(neos[0].color, "red & amber");
    assert_eq!(neos[0].tail_length, 22);
    assert_eq!(neos[0].weight, 32);
}

#[tokio::test]
async fn create_rejects_invalid_models_without_touching_storage() {
    let service = seeded_service().await;

    for request in [
        create_request("Rex", "brown", 2, -1),
        create_request("Rex", "brown", 2, 0),
        create_request("Rex", "brown", -1, 5),
        create_request("", "brown", 2, 5),
        create_request("Rex", "", 2, 5),
    ] {
        let err = service.create_dog(request).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(detail) if detail == "Invalid dog model"
        ));
    }

    let dogs = service.list_dogs(ListDogsRequest::default()).await.unwrap();
    assert_eq!(dogs.len(), 2);
}

#[tokio::test]
async fn create_after_a_failed_create_succeeds() {
    let service = seeded_service().await;

    assert!(
        service
            .create_dog(create_request("Neo", "grey", 1, 1))
            .await
            .is_err()
    );

    let created = service
        .create_dog(create_request("Buddy", "black", 3, 9))
        .await
        .unwrap();
    assert_eq!(created.name, "Buddy");

    let dogs = service.list_dogs(ListDogsRequest::default()).await.unwrap();
    assert_eq!(dogs.len(), 3);
}
