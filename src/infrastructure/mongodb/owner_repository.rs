use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::domain::owner::{model::Owner, repository::OwnerRepository};
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::infrastructure::mongodb::counters::IdSequence;
use crate::utils::errors::ApiError;
use crate::utils::like::to_regex_source;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct OwnerDocument {
    #[serde(rename = "_id")]
    id: i64,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl OwnerDocument {
    fn from_owner(id: i64, owner: Owner) -> Self {
        OwnerDocument {
            id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}

impl From<OwnerDocument> for Owner {
    fn from(document: OwnerDocument) -> Self {
        Owner {
            id: Some(document.id),
            first_name: document.first_name,
            last_name: document.last_name,
            address: document.address,
            city: document.city,
            telephone: document.telephone,
        }
    }
}

pub struct MongoOwnerRepository {
    owners: Collection<OwnerDocument>,
    ids: IdSequence,
}

impl MongoOwnerRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            owners: context.collection("owners"),
            ids: IdSequence::new(context, "owners"),
        }
    }

    async fn collect(
        &self,
        filter: mongodb::bson::Document,
    ) -> Result<Vec<Owner>, ApiError> {
        let mut cursor = self.owners.find(filter).sort(doc! { "_id": 1 }).await?;
        let mut owners = Vec::new();

        while let Some(document) = cursor.next().await {
            match document {
                Ok(document) => owners.push(document.into()),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(owners)
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {

    async fn find_all(&self) -> Result<Vec<Owner>, ApiError> {
        self.collect(doc! {}).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, ApiError> {
        let owner = self.owners.find_one(doc! { "_id": id }).await?;
        Ok(owner.map(Owner::from))
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>, ApiError> {
        let owner = self.owners.find_one(doc! { "last_name": last_name }).await?;
        Ok(owner.map(Owner::from))
    }

    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>, ApiError> {
        let filter = doc! {
            "last_name": { "$regex": to_regex_source(pattern), "$options": "s" }
        };
        self.collect(filter).await
    }

    async fn save(&self, owner: Owner) -> Result<Owner, ApiError> {
        let id = match owner.id {
            Some(id) => {
                self.ids.advance_to(id).await?;
                id
            }
            None => self.ids.next_id().await?,
        };
        let document = OwnerDocument::from_owner(id, owner);

        self.owners
            .replace_one(doc! { "_id": id }, &document)
            .upsert(true)
            .await?;
        Ok(document.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.owners.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
