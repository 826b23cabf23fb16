use async_trait::async_trait;

use crate::domain::speciality::{model::Speciality, service::SpecialityService};
use crate::services::map::MapStore;
use crate::utils::errors::ApiError;

#[derive(Default)]
pub struct SpecialityMapService {
    store: MapStore<Speciality>,
}

impl SpecialityMapService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpecialityService for SpecialityMapService {

    async fn find_all(&self) -> Result<Vec<Speciality>, ApiError> {
        self.store.find_all()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Speciality>, ApiError> {
        self.store.find_by_id(id)
    }

    async fn save(&self, speciality: Speciality) -> Result<Option<Speciality>, ApiError> {
        self.store.save(speciality).map(Some)
    }

    async fn delete(&self, speciality: &Speciality) -> Result<(), ApiError> {
        self.store.delete(speciality)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete_by_id(id)
    }
}
