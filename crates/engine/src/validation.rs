//! Declarative field validation — run this before any persistence work.
//!
//! Request types describe their fields through [`Validate`]; each field
//! carries a static list of rules for its value kind.  A [`ValidationGate`]
//! walks those fields and reports the first violated rule of every field.
//!
//! Text rules ([`TextRule`]):
//! - `Required` — non-empty.
//! - `Min(n)` / `Max(n)` — length in characters.
//!
//! Integer rules ([`IntegerRule`]):
//! - `Required` — non-zero.
//! - `Positive` — strictly greater than zero.

use std::fmt;

/// A constraint on a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    Required,
    Min(usize),
    Max(usize),
}

impl TextRule {
    fn holds(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Min(n) => value.chars().count() >= n,
            Self::Max(n) => value.chars().count() <= n,
        }
    }
}

/// A constraint on an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerRule {
    Required,
    Positive,
}

impl IntegerRule {
    fn holds(self, value: i64) -> bool {
        match self {
            Self::Required => value != 0,
            Self::Positive => value > 0,
        }
    }
}

/// A violated rule of either kind, as reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Text(TextRule),
    Integer(IntegerRule),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(TextRule::Required) | Self::Integer(IntegerRule::Required) => {
                write!(f, "required")
            }
            Self::Text(TextRule::Min(n)) => write!(f, "min={n}"),
            Self::Text(TextRule::Max(n)) => write!(f, "max={n}"),
            Self::Integer(IntegerRule::Positive) => write!(f, "positive"),
        }
    }
}

/// The value of a field, borrowed from the request, with the rules that
/// apply to it.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str, &'static [TextRule]),
    Integer(i64, &'static [IntegerRule]),
}

/// One field of a request.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn text(name: &'static str, value: &'a str, rules: &'static [TextRule]) -> Self {
        Self { name, value: FieldValue::Text(value, rules) }
    }

    pub fn integer(name: &'static str, value: i64, rules: &'static [IntegerRule]) -> Self {
        Self { name, value: FieldValue::Integer(value, rules) }
    }

    /// The first rule, in declaration order, that the value breaks.
    fn first_violation(&self) -> Option<Rule> {
        match self.value {
            FieldValue::Text(value, rules) => rules
                .iter()
                .find(|rule| !rule.holds(value))
                .map(|rule| Rule::Text(*rule)),
            FieldValue::Integer(value, rules) => rules
                .iter()
                .find(|rule| !rule.holds(value))
                .map(|rule| Rule::Integer(*rule)),
        }
    }
}

/// Implemented by every request shape that can be validated.
pub trait Validate {
    /// Type label used in diagnostics, e.g. `CreateCategoryRequest`.
    fn request_name(&self) -> &'static str;

    /// The request's fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub request: &'static str,
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}.{}' failed on the '{}' rule",
            self.request, self.field, self.rule
        )
    }
}

/// Every rule violation found in a request, in field order.  Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Checks a request against its declared field rules.
pub trait ValidationGate: Send + Sync {
    fn validate(&self, request: &dyn Validate) -> Result<(), ValidationErrors>;
}

/// The default gate: evaluates every field's rules in order and records the
/// first one that fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl ValidationGate for RuleValidator {
    fn validate(&self, request: &dyn Validate) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = request
            .fields()
            .into_iter()
            .filter_map(|field| {
                field.first_violation().map(|rule| FieldError {
                    request: request.request_name(),
                    field: field.name,
                    rule,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateCategoryRequest, UpdateCategoryRequest, NAME_MAX_LEN};

    fn create(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest { name: name.to_owned() }
    }

    #[test]
    fn empty_name_fails_on_required() {
        let err = RuleValidator.validate(&create("")).unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError { request: "CreateCategoryRequest", field: "name", rule: Rule::Text(TextRule::Required) }]
        );
    }

    #[test]
    fn name_length_boundaries() {
        assert!(RuleValidator.validate(&create("G")).is_ok());
        assert!(RuleValidator.validate(&create(&"a".repeat(NAME_MAX_LEN))).is_ok());

        let err = RuleValidator
            .validate(&create(&"a".repeat(NAME_MAX_LEN + 1)))
            .unwrap_err();
        assert_eq!(err.errors()[0].rule, Rule::Text(TextRule::Max(200)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 200 two-byte characters are still 200 characters.
        assert!(RuleValidator.validate(&create(&"é".repeat(NAME_MAX_LEN))).is_ok());
    }

    #[test]
    fn update_requires_a_positive_id() {
        let zero = UpdateCategoryRequest { id: 0, name: "Laptop".into() };
        let err = RuleValidator.validate(&zero).unwrap_err();
        assert_eq!(err.errors()[0].field, "id");
        assert_eq!(err.errors()[0].rule, Rule::Integer(IntegerRule::Required));

        let negative = UpdateCategoryRequest { id: -3, name: "Laptop".into() };
        let err = RuleValidator.validate(&negative).unwrap_err();
        assert_eq!(err.errors()[0].rule, Rule::Integer(IntegerRule::Positive));

        let ok = UpdateCategoryRequest { id: 3, name: "Laptop".into() };
        assert!(RuleValidator.validate(&ok).is_ok());
    }

    #[test]
    fn every_violated_field_is_reported_one_per_line() {
        let bad = UpdateCategoryRequest { id: 0, name: String::new() };
        let err = RuleValidator.validate(&bad).unwrap_err();

        assert_eq!(err.errors().len(), 2);
        assert_eq!(
            err.to_string(),
            "Key: 'UpdateCategoryRequest.id' failed on the 'required' rule\n\
             Key: 'UpdateCategoryRequest.name' failed on the 'required' rule"
        );
    }

    #[test]
    fn rules_render_with_parameters() {
        assert_eq!(Rule::Text(TextRule::Max(200)).to_string(), "max=200");
        assert_eq!(Rule::Text(TextRule::Min(1)).to_string(), "min=1");
        assert_eq!(Rule::Integer(IntegerRule::Required).to_string(), "required");
        assert_eq!(Rule::Integer(IntegerRule::Positive).to_string(), "positive");
    }

    #[test]
    fn rules_apply_per_value_kind() {
        // Text fields only ever see text rules; "5" is just a short name.
        let field = Field::text("name", "5", &[TextRule::Required, TextRule::Max(1)]);
        assert_eq!(field.first_violation(), None);

        let field = Field::integer("id", -5, &[IntegerRule::Required, IntegerRule::Positive]);
        assert_eq!(field.first_violation(), Some(Rule::Integer(IntegerRule::Positive)));
    }
}
