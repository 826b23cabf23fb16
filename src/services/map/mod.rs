pub mod map_store;
pub mod owner_map_service;
pub mod pet_map_service;
pub mod speciality_map_service;
pub mod visit_map_service;

pub use map_store::MapStore;
pub use owner_map_service::OwnerMapService;
pub use pet_map_service::PetMapService;
pub use speciality_map_service::SpecialityMapService;
pub use visit_map_service::VisitMapService;
