use async_trait::async_trait;

use crate::{domain::visit::model::Visit, utils::errors::ApiError};

#[async_trait]
pub trait VisitService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Visit>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Visit>, ApiError>;
    async fn save(&self, visit: Visit) -> Result<Visit, ApiError>;
}
