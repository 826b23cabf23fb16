use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::infrastructure::database::mongo_context::MongoContext;
use crate::utils::errors::ApiError;

const COUNTERS: &str = "counters";

/// Integer id sequence stored as `{ _id: <name>, seq: <last id> }` in the
/// `counters` collection.
pub struct IdSequence {
    counters: Collection<Document>,
    name: String,
}

impl IdSequence {
    pub fn new(context: &MongoContext, name: &str) -> Self {
        Self {
            counters: context.collection(COUNTERS),
            name: name.to_string(),
        }
    }

    pub async fn next_id(&self) -> Result<i64, ApiError> {
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": self.name.as_str() }, doc! { "$inc": { "seq": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                ApiError::InternalServerError(format!("id sequence {} was not created", self.name))
            })?;

        counter
            .get_i64("seq")
            .map_err(|e| ApiError::InternalServerError(format!("id sequence {}: {}", self.name, e)))
    }

    /// Raises the sequence to at least `id` so later `next_id` calls skip it.
    pub async fn advance_to(&self, id: i64) -> Result<(), ApiError> {
        self.counters
            .update_one(doc! { "_id": self.name.as_str() }, doc! { "$max": { "seq": id } })
            .upsert(true)
            .await?;
        Ok(())
    }
}
