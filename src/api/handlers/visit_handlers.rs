use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::api::{state::AppState, view::render};
use crate::controllers::visit_controller::VIEWS_CREATE_OR_UPDATE_VISIT_FORM;
use crate::domain::visit::model::VisitForm;
use crate::domain::web::{Model, ModelAttribute, ModelMap, View};
use crate::utils::errors::ApiError;

pub async fn init_new_visit_form(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>
) -> impl Responder {
    let (_owner_id, pet_id) = path.into_inner();
    let mut model = ModelMap::new();

    match state.visit_controller().load_pet_with_visit(pet_id, &mut model).await {
        Ok(_) => render(View::Page(VIEWS_CREATE_OR_UPDATE_VISIT_FORM), &model, &[]),
        Err(e) => e.error_response()
    }
}

pub async fn process_new_visit_form(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    form: web::Json<VisitForm>
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();
    match submit_visit(&state, owner_id, pet_id, form.into_inner()).await {
        Ok(response) => response,
        Err(e) => e.error_response()
    }
}

async fn submit_visit(
    state: &AppState,
    owner_id: i64,
    pet_id: i64,
    form: VisitForm
) -> Result<HttpResponse, ApiError> {
    let controller = state.visit_controller();
    let mut model = ModelMap::new();

    let mut visit = controller.load_pet_with_visit(pet_id, &mut model).await?;
    visit.description = form.description;
    if let Some(date) = form.date {
        visit.date = date;
    }

    let errors = visit.validate();
    let view = controller.process_new_visit_form(owner_id, visit.clone(), &errors).await?;

    model.add_attribute("visit", ModelAttribute::Visit(visit));
    Ok(render(view, &model, errors.errors()))
}
