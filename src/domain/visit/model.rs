use chrono::{Local, NaiveDate};
use serde::{Serialize, Deserialize};

use crate::domain::web::FormErrors;
use crate::domain::{Entity, Pet};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Visit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub description: String,
    pub pet: Option<Pet>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct VisitForm {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl Visit {
    /// A fresh visit dated today.
    pub fn new() -> Self {
        Visit {
            id: None,
            date: Local::now().date_naive(),
            description: String::new(),
            pet: None,
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require_non_blank("description", &self.description);
        errors
    }
}

impl Default for Visit {
    fn default() -> Self {
        Visit::new()
    }
}

impl Entity for Visit {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
