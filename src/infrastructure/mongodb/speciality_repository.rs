use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::domain::speciality::{model::Speciality, repository::SpecialtyRepository};
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::infrastructure::mongodb::counters::IdSequence;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct SpecialityDocument {
    #[serde(rename = "_id")]
    id: i64,
    description: String,
}

impl From<SpecialityDocument> for Speciality {
    fn from(document: SpecialityDocument) -> Self {
        Speciality {
            id: Some(document.id),
            description: document.description,
        }
    }
}

pub struct MongoSpecialtyRepository {
    specialities: Collection<SpecialityDocument>,
    ids: IdSequence,
}

impl MongoSpecialtyRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            specialities: context.collection("specialities"),
            ids: IdSequence::new(context, "specialities"),
        }
    }
}

#[async_trait]
impl SpecialtyRepository for MongoSpecialtyRepository {

    async fn find_all(&self) -> Result<Vec<Speciality>, ApiError> {
        let mut cursor = self.specialities.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let mut specialities = Vec::new();

        while let Some(document) = cursor.next().await {
            specialities.push(document?.into());
        }
        Ok(specialities)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Speciality>, ApiError> {
        let speciality = self.specialities.find_one(doc! { "_id": id }).await?;
        Ok(speciality.map(Speciality::from))
    }

    async fn save(&self, speciality: Speciality) -> Result<Option<Speciality>, ApiError> {
        let id = match speciality.id {
            Some(id) => {
                self.ids.advance_to(id).await?;
                id
            }
            None => self.ids.next_id().await?,
        };
        let document = SpecialityDocument { id, description: speciality.description };

        self.specialities
            .replace_one(doc! { "_id": id }, &document)
            .upsert(true)
            .await?;
        Ok(Some(document.into()))
    }

    async fn delete(&self, speciality: &Speciality) -> Result<(), ApiError> {
        match speciality.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(()),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.specialities.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
