pub mod catalog;
pub mod handlers;

pub use crate::domain::model::{ContactForm, ContactSubmission, Project, Skill, SkillMatrix};
pub use crate::domain::ports::{ApiResponse, Endpoint, HttpMethod};
pub use crate::utils::error::Result;
