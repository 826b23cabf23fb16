use async_trait::async_trait;

use crate::domain::owner::{model::Owner, service::OwnerService};
use crate::services::map::MapStore;
use crate::utils::{errors::ApiError, like::LikePattern};

#[derive(Default)]
pub struct OwnerMapService {
    store: MapStore<Owner>,
}

impl OwnerMapService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerService for OwnerMapService {

    async fn find_all(&self) -> Result<Vec<Owner>, ApiError> {
        self.store.find_all()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, ApiError> {
        self.store.find_by_id(id)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>, ApiError> {
        let owners = self.store.find_where(|owner| owner.last_name == last_name)?;
        Ok(owners.into_iter().next())
    }

    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>, ApiError> {
        let pattern = LikePattern::new(pattern)?;
        self.store.find_where(|owner| pattern.matches(&owner.last_name))
    }

    async fn save(&self, owner: Owner) -> Result<Owner, ApiError> {
        self.store.save(owner)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete_by_id(id)
    }
}
