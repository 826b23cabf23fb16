use actix_web::web;

use crate::api::handlers::owner_handlers::{
    init_creation_form, init_find_form, process_creation_form, process_find_form, show_owner,
};
use crate::api::handlers::speciality_handlers::{
    delete_speciality, get_all_specialities, get_speciality, save_speciality,
};
use crate::api::handlers::visit_handlers::{init_new_visit_form, process_new_visit_form};

pub fn owner_routes(cfg: &mut web::ServiceConfig) {
    // literal segments before `{owner_id}`
    cfg.service(
        web::resource("/owners/find")
            .route(web::get().to(init_find_form))
    );

    cfg.service(
        web::resource("/owners/new")
            .route(web::get().to(init_creation_form))
            .route(web::post().to(process_creation_form))
    );

    cfg.service(
        web::resource("/owners")
            .route(web::get().to(process_find_form))
    );

    cfg.service(
        web::resource("/owners/{owner_id}")
            .route(web::get().to(show_owner))
    );
}

pub fn visit_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/owners/{owner_id}/pets/{pet_id}/visits/new")
            .route(web::get().to(init_new_visit_form))
            .route(web::post().to(process_new_visit_form))
    );
}

pub fn speciality_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/specialities")
            .route(web::get().to(get_all_specialities))
            .route(web::post().to(save_speciality))
    );

    cfg.service(
        web::resource("/specialities/{id}")
            .route(web::get().to(get_speciality))
            .route(web::delete().to(delete_speciality))
    );
}
