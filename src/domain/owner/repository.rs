use async_trait::async_trait;

use crate::{domain::owner::model::Owner, utils::errors::ApiError};

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Owner>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, ApiError>;
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>, ApiError>;
    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>, ApiError>;
    async fn save(&self, owner: Owner) -> Result<Owner, ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
}
