pub mod errors;
pub mod config;
pub mod like;

pub use errors::ApiError;
pub use config::AppConfig;
