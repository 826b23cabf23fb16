use std::sync::Arc;

use crate::controllers::{OwnerController, VisitController};
use crate::domain::owner::service::OwnerService;
use crate::domain::pet::service::PetService;
use crate::domain::speciality::service::SpecialityService;
use crate::domain::visit::service::VisitService;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::infrastructure::mongodb::{MongoOwnerRepository, MongoSpecialtyRepository};
use crate::services::map::{OwnerMapService, PetMapService, SpecialityMapService, VisitMapService};
use crate::services::sd::{OwnerSdService, SpecialitySdService};

#[derive(Clone)]
pub struct AppState {
    pub owners: Arc<dyn OwnerService>,
    pub pets: Arc<dyn PetService>,
    pub visits: Arc<dyn VisitService>,
    pub specialities: Arc<dyn SpecialityService>,
}

impl AppState {
    /// Every service backed by the in-memory map store.
    pub fn in_memory() -> Self {
        AppState {
            owners: Arc::new(OwnerMapService::new()),
            pets: Arc::new(PetMapService::new()),
            visits: Arc::new(VisitMapService::new()),
            specialities: Arc::new(SpecialityMapService::new()),
        }
    }

    /// Owners and specialities in MongoDB; pets and visits stay in memory.
    pub fn with_mongo(context: &MongoContext) -> Self {
        let owner_repository = Arc::new(MongoOwnerRepository::new(context));
        let speciality_repository = Arc::new(MongoSpecialtyRepository::new(context));

        AppState {
            owners: Arc::new(OwnerSdService::new(owner_repository)),
            specialities: Arc::new(SpecialitySdService::new(speciality_repository)),
            ..AppState::in_memory()
        }
    }

    pub fn owner_controller(&self) -> OwnerController {
        OwnerController::new(self.owners.clone())
    }

    pub fn visit_controller(&self) -> VisitController {
        VisitController::new(self.visits.clone(), self.pets.clone())
    }
}
