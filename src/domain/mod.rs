pub mod owner;
pub mod pet;
pub mod speciality;
pub mod visit;
pub mod web;

pub use owner::model::Owner;
pub use pet::model::Pet;
pub use speciality::model::Speciality;
pub use visit::model::Visit;

/// Anything the stores key by a persistence-assigned identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
}
