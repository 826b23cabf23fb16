use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

use crate::domain::Entity;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub pet_type: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Option<i64>,
}

impl Pet {
    pub fn with_id(id: i64) -> Self {
        Pet {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl Entity for Pet {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
