use async_trait::async_trait;

use crate::domain::visit::{model::Visit, service::VisitService};
use crate::services::map::MapStore;
use crate::utils::errors::ApiError;

#[derive(Default)]
pub struct VisitMapService {
    store: MapStore<Visit>,
}

impl VisitMapService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitService for VisitMapService {

    async fn find_all(&self) -> Result<Vec<Visit>, ApiError> {
        self.store.find_all()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Visit>, ApiError> {
        self.store.find_by_id(id)
    }

    /// A visit must belong to a saved pet that has an owner.
    async fn save(&self, visit: Visit) -> Result<Visit, ApiError> {
        let attached = visit
            .pet
            .as_ref()
            .map_or(false, |pet| pet.id.is_some() && pet.owner_id.is_some());
        if !attached {
            return Err(ApiError::InvalidData("Invalid Visit".to_string()));
        }
        self.store.save(visit)
    }
}
