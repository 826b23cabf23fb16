use async_trait::async_trait;

use crate::{domain::speciality::model::Speciality, utils::errors::ApiError};

#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Speciality>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Speciality>, ApiError>;
    /// `None` when the store declined to persist the value.
    async fn save(&self, speciality: Speciality) -> Result<Option<Speciality>, ApiError>;
    async fn delete(&self, speciality: &Speciality) -> Result<(), ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
}
