pub mod counters;
pub mod owner_repository;
pub mod speciality_repository;

pub use owner_repository::MongoOwnerRepository;
pub use speciality_repository::MongoSpecialtyRepository;
