use serde::{Serialize, Deserialize};

use crate::domain::Entity;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Speciality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: String,
}

/// Speciality fields as submitted; the store assigns the id.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SpecialityForm {
    #[serde(default)]
    pub description: String,
}

impl From<SpecialityForm> for Speciality {
    fn from(form: SpecialityForm) -> Self {
        Speciality::new(form.description)
    }
}

impl Speciality {
    pub fn new(description: impl Into<String>) -> Self {
        Speciality {
            id: None,
            description: description.into(),
        }
    }
}

impl Entity for Speciality {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
