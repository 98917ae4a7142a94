//! Request shapes accepted by the category use cases.
//!
//! The persisted record itself, [`Category`], is defined in the `db` crate
//! and re-exported here.

use serde::{Deserialize, Serialize};

pub use db::Category;

use crate::validation::{Field, IntegerRule, TextRule, Validate};

/// Longest accepted category name, matching the `VARCHAR(200)` column.
pub const NAME_MAX_LEN: usize = 200;

const NAME_RULES: &[TextRule] = &[TextRule::Required, TextRule::Min(1), TextRule::Max(NAME_MAX_LEN)];
const ID_RULES: &[IntegerRule] = &[IntegerRule::Required, IntegerRule::Positive];

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

/// Payload for creating a category.  The id is always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

impl Validate for CreateCategoryRequest {
    fn request_name(&self) -> &'static str {
        "CreateCategoryRequest"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::text("name", &self.name, NAME_RULES)]
    }
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

/// Payload for replacing a category's name.
///
/// `id` comes from the request path and is set by
/// [`CategoryService::update`](crate::CategoryService::update); an `id` in a
/// JSON body is never read, whatever its type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(skip_deserializing)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Validate for UpdateCategoryRequest {
    fn request_name(&self) -> &'static str {
        "UpdateCategoryRequest"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::integer("id", self.id, ID_RULES),
            Field::text("name", &self.name, NAME_RULES),
        ]
    }
}
