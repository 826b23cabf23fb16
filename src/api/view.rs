use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::web::{FieldError, ModelMap, View};

#[derive(Serialize)]
struct PageBody<'a> {
    view: &'a str,
    model: &'a ModelMap,
    #[serde(skip_serializing_if = "no_errors")]
    errors: &'a [FieldError],
}

fn no_errors(errors: &&[FieldError]) -> bool {
    errors.is_empty()
}

/// Turns a controller's view into a response: redirects become `303 See
/// Other`, pages are returned as their name plus the view-model in JSON.
pub fn render(view: View, model: &ModelMap, errors: &[FieldError]) -> HttpResponse {
    match view {
        View::Redirect(location) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish(),
        View::Page(name) => HttpResponse::Ok().json(PageBody {
            view: name,
            model,
            errors,
        }),
    }
}
