//! The web-tier contracts the controllers speak: the view they pick, the
//! view-model they fill and the validation result they consult.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::domain::{Owner, Pet, Visit};

/// Outcome of a controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A named page rendered from the view-model.
    Page(&'static str),
    /// Tells the caller to re-request another resource.
    Redirect(String),
}

impl View {
    pub fn redirect(path: impl Into<String>) -> Self {
        View::Redirect(path.into())
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, View::Redirect(_))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Page(name) => f.write_str(name),
            View::Redirect(path) => write!(f, "redirect:{}", path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelAttribute {
    Owner(Owner),
    Owners(Vec<Owner>),
    Pet(Option<Pet>),
    Visit(Visit),
}

/// Key-value mapping handed to the rendering layer.
pub trait Model {
    fn add_attribute(&mut self, key: &str, value: ModelAttribute);
}

pub type ModelMap = HashMap<String, ModelAttribute>;

impl Model for ModelMap {
    fn add_attribute(&mut self, key: &str, value: ModelAttribute) {
        self.insert(key.to_string(), value);
    }
}

pub trait BindingResult {
    fn has_errors(&self) -> bool;
    fn reject_value(&mut self, field: &str, code: &str, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Field errors collected while validating a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub(crate) fn require_non_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.reject_value(field, "NotBlank", "must not be blank");
        }
    }
}

impl BindingResult for FormErrors {
    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn reject_value(&mut self, field: &str, code: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        });
    }
}
