use async_trait::async_trait;

use crate::{domain::pet::model::Pet, utils::errors::ApiError};

#[async_trait]
pub trait PetService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Pet>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, ApiError>;
    async fn save(&self, pet: Pet) -> Result<Pet, ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
}
