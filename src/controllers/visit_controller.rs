use std::sync::Arc;

use crate::domain::pet::service::PetService;
use crate::domain::visit::{model::Visit, service::VisitService};
use crate::domain::web::{BindingResult, Model, ModelAttribute, View};
use crate::utils::errors::ApiError;

pub const VIEWS_CREATE_OR_UPDATE_VISIT_FORM: &str = "pets/createOrUpdateVisitForm";

pub struct VisitController {
    visit_service: Arc<dyn VisitService>,
    pet_service: Arc<dyn PetService>,
}

impl VisitController {
    pub fn new(visit_service: Arc<dyn VisitService>, pet_service: Arc<dyn PetService>) -> Self {
        Self { visit_service, pet_service }
    }

    /// Builds a new visit for the pet and exposes both to the view.
    ///
    /// Whatever the pet service answers is attached as-is, including no pet.
    pub async fn load_pet_with_visit(
        &self,
        pet_id: i64,
        model: &mut dyn Model,
    ) -> Result<Visit, ApiError> {
        let pet = self.pet_service.find_by_id(pet_id).await?;
        if pet.is_none() {
            log::warn!("no pet with id {} for new visit", pet_id);
        }

        let visit = Visit {
            pet: pet.clone(),
            ..Visit::new()
        };
        model.add_attribute("pet", ModelAttribute::Pet(pet));
        model.add_attribute("visit", ModelAttribute::Visit(visit.clone()));
        Ok(visit)
    }

    pub async fn process_new_visit_form(
        &self,
        owner_id: i64,
        visit: Visit,
        result: &dyn BindingResult,
    ) -> Result<View, ApiError> {
        if result.has_errors() {
            return Ok(View::Page(VIEWS_CREATE_OR_UPDATE_VISIT_FORM));
        }

        self.visit_service.save(visit).await?;
        Ok(View::redirect(format!("/owners/{}", owner_id)))
    }
}
