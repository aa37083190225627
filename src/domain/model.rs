use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_non_empty_string, validate_required_field};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub demo: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Skill categories in display order. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatrix {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub database: Vec<Skill>,
    pub tools: Vec<Skill>,
}

/// Raw contact form as it arrives off the wire. Unknown fields are ignored,
/// every known field is optional until validation runs.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A fully validated contact submission. Never persisted: constructed,
/// logged, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Field presence is checked before email syntax, so a form that is both
    /// incomplete and malformed reports the missing field.
    pub fn from_form(form: ContactForm) -> Result<Self> {
        let name = validate_required_field("name", &form.name)?;
        validate_non_empty_string("name", name)?;
        let email = validate_required_field("email", &form.email)?;
        validate_non_empty_string("email", email)?;
        let subject = validate_required_field("subject", &form.subject)?;
        validate_non_empty_string("subject", subject)?;
        let message = validate_required_field("message", &form.message)?;
        validate_non_empty_string("message", message)?;

        validate_email(email)?;

        Ok(Self {
            name: name.clone(),
            email: email.clone(),
            subject: subject.clone(),
            message: message.clone(),
        })
    }
}
