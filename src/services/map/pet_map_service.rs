use async_trait::async_trait;

use crate::domain::pet::{model::Pet, service::PetService};
use crate::services::map::MapStore;
use crate::utils::errors::ApiError;

#[derive(Default)]
pub struct PetMapService {
    store: MapStore<Pet>,
}

impl PetMapService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetService for PetMapService {

    async fn find_all(&self) -> Result<Vec<Pet>, ApiError> {
        self.store.find_all()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, ApiError> {
        self.store.find_by_id(id)
    }

    async fn save(&self, pet: Pet) -> Result<Pet, ApiError> {
        self.store.save(pet)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete_by_id(id)
    }
}
