pub mod api;
pub mod bootstrap;
pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod routes;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
