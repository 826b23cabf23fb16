pub mod map;
pub mod sd;
