use std::sync::Arc;

use crate::application::dog_service::DogService;

#[derive(Clone)]
pub struct AppState {
    pub dog_service: Arc<DogService>,
}

impl AppState {
    pub fn new(dog_service: Arc<DogService>) -> Self {
        Self { dog_service }
    }
}
