use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::owner::{model::Owner, repository::OwnerRepository, service::OwnerService};
use crate::utils::errors::ApiError;

/// Owner service backed by an [`OwnerRepository`].
pub struct OwnerSdService {
    repository: Arc<dyn OwnerRepository>,
}

impl OwnerSdService {
    pub fn new(repository: Arc<dyn OwnerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OwnerService for OwnerSdService {

    async fn find_all(&self) -> Result<Vec<Owner>, ApiError> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, ApiError> {
        self.repository.find_by_id(id).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>, ApiError> {
        self.repository.find_by_last_name(last_name).await
    }

    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>, ApiError> {
        self.repository.find_all_by_last_name_like(pattern).await
    }

    async fn save(&self, owner: Owner) -> Result<Owner, ApiError> {
        self.repository.save(owner).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete_by_id(id).await
    }
}
