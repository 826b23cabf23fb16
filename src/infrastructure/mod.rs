pub mod database;
pub mod mongodb;

pub use database::mongo_context;
