//! `engine` crate — category request models, validation, and the
//! transactional use cases.

pub mod models;
pub mod error;
pub mod validation;
pub mod service;

pub use models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use error::ServiceError;
pub use validation::{RuleValidator, ValidationErrors, ValidationGate};
pub use service::CategoryService;
