use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::api::state::AppState;
use crate::domain::speciality::model::{Speciality, SpecialityForm};
use crate::utils::errors::ApiError;

pub async fn get_all_specialities(
    state: web::Data<AppState>
) -> impl Responder {
    match state.specialities.find_all().await {
        Ok(specialities) => HttpResponse::Ok().json(specialities),
        Err(e) => e.error_response()
    }
}

pub async fn get_speciality(
    state: web::Data<AppState>,
    id: web::Path<i64>
) -> impl Responder {
    let id = id.into_inner();
    match state.specialities.find_by_id(id).await {
        Ok(Some(speciality)) => HttpResponse::Ok().json(speciality),
        Ok(None) => ApiError::not_found("Speciality", id).error_response(),
        Err(e) => e.error_response()
    }
}

pub async fn save_speciality(
    state: web::Data<AppState>,
    form: web::Json<SpecialityForm>
) -> impl Responder {
    let speciality = Speciality::from(form.into_inner());
    if speciality.description.trim().is_empty() {
        return ApiError::InvalidData("Description cannot be empty".to_string()).error_response();
    }

    match state.specialities.save(speciality).await {
        Ok(Some(saved)) => HttpResponse::Created().json(saved),
        Ok(None) => ApiError::Conflict("Speciality was not saved".to_string()).error_response(),
        Err(e) => e.error_response()
    }
}

pub async fn delete_speciality(
    state: web::Data<AppState>,
    id: web::Path<i64>
) -> impl Responder {
    match state.specialities.delete_by_id(id.into_inner()).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response()
    }
}
