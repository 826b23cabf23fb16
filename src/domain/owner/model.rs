use serde::{Serialize, Deserialize};

use crate::domain::web::FormErrors;
use crate::domain::Entity;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// Owner fields as submitted by the creation form.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OwnerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
}

impl Owner {
    /// An owner not yet persisted.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Owner {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Owner {
            id: Some(id),
            ..Owner::new(first_name, last_name)
        }
    }

    pub fn validate(&self) -> FormErrors {
        use crate::domain::web::BindingResult;

        let mut errors = FormErrors::new();
        errors.require_non_blank("firstName", &self.first_name);
        errors.require_non_blank("lastName", &self.last_name);
        errors.require_non_blank("address", &self.address);
        errors.require_non_blank("city", &self.city);

        let telephone = self.telephone.trim();
        let digits_only = telephone.chars().all(|c| c.is_ascii_digit());
        if telephone.is_empty() || telephone.len() > 10 || !digits_only {
            errors.reject_value("telephone", "Digits", "numeric value out of bounds (<10 digits>.<0 digits> expected)");
        }
        errors
    }
}

impl From<OwnerForm> for Owner {
    fn from(form: OwnerForm) -> Self {
        Owner {
            id: None,
            first_name: form.first_name,
            last_name: form.last_name,
            address: form.address,
            city: form.city,
            telephone: form.telephone,
        }
    }
}

impl Entity for Owner {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
