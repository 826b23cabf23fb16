pub mod owner_sd_service;
pub mod speciality_sd_service;

pub use owner_sd_service::OwnerSdService;
pub use speciality_sd_service::SpecialitySdService;
