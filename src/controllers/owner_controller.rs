use std::sync::Arc;

use crate::domain::owner::{model::Owner, service::OwnerService};
use crate::domain::web::{BindingResult, Model, ModelAttribute, View};
use crate::utils::{errors::ApiError, like::wildcard};

pub const VIEWS_OWNER_CREATE_OR_UPDATE_FORM: &str = "owners/createOrUpdateOwnerForm";
pub const VIEWS_FIND_OWNERS: &str = "owners/findOwners";
pub const VIEWS_OWNERS_LIST: &str = "owners/ownersList";
pub const VIEWS_OWNER_DETAILS: &str = "owners/ownerDetails";

/// Model key for the search matches.
pub const SELECTIONS: &str = "selections";

pub struct OwnerController {
    service: Arc<dyn OwnerService>,
}

impl OwnerController {
    pub fn new(service: Arc<dyn OwnerService>) -> Self {
        Self { service }
    }

    pub fn init_find_form(&self, model: &mut dyn Model) -> View {
        model.add_attribute("owner", ModelAttribute::Owner(Owner::default()));
        View::Page(VIEWS_FIND_OWNERS)
    }

    /// Searches owners whose last name contains the criteria's last name.
    ///
    /// One match redirects to that owner; several go to the list view under
    /// [`SELECTIONS`]; none rejects `lastName` and shows the search form again.
    pub async fn process_find_form(
        &self,
        owner: &Owner,
        result: &mut dyn BindingResult,
        model: &mut dyn Model,
    ) -> Result<View, ApiError> {
        let pattern = wildcard(&owner.last_name);
        let mut owners = self.service.find_all_by_last_name_like(&pattern).await?;
        log::debug!("owner search {} matched {} owners", pattern, owners.len());

        match owners.len() {
            0 => {
                result.reject_value("lastName", "notFound", "not found");
                Ok(View::Page(VIEWS_FIND_OWNERS))
            }
            1 => {
                let found = owners.remove(0);
                let id = found.id.ok_or_else(|| ApiError::missing_id("Owner"))?;
                Ok(View::redirect(format!("/owners/{}", id)))
            }
            _ => {
                model.add_attribute(SELECTIONS, ModelAttribute::Owners(owners));
                Ok(View::Page(VIEWS_OWNERS_LIST))
            }
        }
    }

    pub fn init_creation_form(&self, model: &mut dyn Model) -> View {
        model.add_attribute("owner", ModelAttribute::Owner(Owner::default()));
        View::Page(VIEWS_OWNER_CREATE_OR_UPDATE_FORM)
    }

    pub async fn process_creation_form(
        &self,
        owner: Owner,
        result: &dyn BindingResult,
    ) -> Result<View, ApiError> {
        if result.has_errors() {
            return Ok(View::Page(VIEWS_OWNER_CREATE_OR_UPDATE_FORM));
        }

        let saved = self.service.save(owner).await?;
        let id = saved.id.ok_or_else(|| ApiError::missing_id("Owner"))?;
        log::info!("saved owner {}", id);
        Ok(View::redirect(format!("/owners/{}", id)))
    }

    pub async fn show_owner(&self, owner_id: i64, model: &mut dyn Model) -> Result<View, ApiError> {
        let owner = self
            .service
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Owner", owner_id))?;

        model.add_attribute("owner", ModelAttribute::Owner(owner));
        Ok(View::Page(VIEWS_OWNER_DETAILS))
    }
}
