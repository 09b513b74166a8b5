use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    application::dto::{CreateDogRequest, DogResponse, ListDogsRequest},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub const SERVICE_VERSION: &str = "Dogshouseservice.Version1.0.1";

pub async fn ping() -> &'static str {
    SERVICE_VERSION
}

pub async fn list_dogs(
    State(state): State<AppState>,
    Query(request): Query<ListDogsRequest>,
) -> ApiResult<Json<Vec<DogResponse>>> {
    let dogs = state
        .dog_service
        .list_dogs(request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(dogs))
}

pub async fn create_dog(
    State(state): State<AppState>,
    Json(request): Json<CreateDogRequest>,
) -> ApiResult<(StatusCode, Json<DogResponse>)> {
    let created = state
        .dog_service
        .create_dog(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}
