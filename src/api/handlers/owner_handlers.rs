use actix_web::{web, Responder, ResponseError};
use serde::Deserialize;

use crate::api::{state::AppState, view::render};
use crate::domain::owner::model::{Owner, OwnerForm};
use crate::domain::web::{FormErrors, Model, ModelAttribute, ModelMap};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FindOwnersQuery {
    pub last_name: Option<String>,
}

pub async fn init_find_form(
    state: web::Data<AppState>
) -> impl Responder {
    let mut model = ModelMap::new();
    let view = state.owner_controller().init_find_form(&mut model);
    render(view, &model, &[])
}

pub async fn process_find_form(
    state: web::Data<AppState>,
    query: web::Query<FindOwnersQuery>
) -> impl Responder {
    let criteria = Owner {
        last_name: query.into_inner().last_name.unwrap_or_default(),
        ..Default::default()
    };
    let mut errors = FormErrors::new();
    let mut model = ModelMap::new();

    match state.owner_controller().process_find_form(&criteria, &mut errors, &mut model).await {
        Ok(view) => render(view, &model, errors.errors()),
        Err(e) => e.error_response()
    }
}

pub async fn init_creation_form(
    state: web::Data<AppState>
) -> impl Responder {
    let mut model = ModelMap::new();
    let view = state.owner_controller().init_creation_form(&mut model);
    render(view, &model, &[])
}

pub async fn process_creation_form(
    state: web::Data<AppState>,
    form: web::Json<OwnerForm>
) -> impl Responder {
    let owner = Owner::from(form.into_inner());
    let errors = owner.validate();

    match state.owner_controller().process_creation_form(owner.clone(), &errors).await {
        Ok(view) => {
            // the form is shown again with what was submitted
            let mut model = ModelMap::new();
            model.add_attribute("owner", ModelAttribute::Owner(owner));
            render(view, &model, errors.errors())
        },
        Err(e) => e.error_response()
    }
}

pub async fn show_owner(
    state: web::Data<AppState>,
    owner_id: web::Path<i64>
) -> impl Responder {
    let mut model = ModelMap::new();

    match state.owner_controller().show_owner(owner_id.into_inner(), &mut model).await {
        Ok(view) => render(view, &model, &[]),
        Err(e) => e.error_response()
    }
}
