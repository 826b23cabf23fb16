pub mod owner_handlers;
pub mod speciality_handlers;
pub mod visit_handlers;
