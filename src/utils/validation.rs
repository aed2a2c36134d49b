//! Flattening of field-level validation failures into display messages.
//!
//! Validation produces a tree that mirrors the input: a failure per field,
//! with children for nested objects and array entries. Clients receive a
//! single line instead, for example:
//!
//! ```text
//! name: should not be empty; address.zip: must be exactly 5 characters
//! ```

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Failures of one field, with nested failures of its sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub property: String,
    pub constraints: Vec<String>,
    pub children: Vec<ValidationFailure>,
}

impl ValidationFailure {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Default::default()
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn with_child(mut self, child: ValidationFailure) -> Self {
        self.children.push(child);
        self
    }
}

/// Renders failures depth-first as `"<dotted.path>: <c1>, <c2>"` lines.
///
/// A node's own line comes before the lines of its children; sibling order is
/// preserved. Nodes with neither constraints nor children contribute nothing.
pub fn flatten(failures: &[ValidationFailure]) -> Vec<String> {
    let mut messages = Vec::new();
    collect(failures, "", &mut messages);
    messages
}

/// Joins all flattened lines with `"; "`.
pub fn combine(failures: &[ValidationFailure]) -> String {
    flatten(failures).join("; ")
}

fn collect(failures: &[ValidationFailure], parent_path: &str, out: &mut Vec<String>) {
    for failure in failures {
        let path: Cow<'_, str> = if parent_path.is_empty() {
            Cow::Borrowed(&failure.property)
        } else if failure.property.is_empty() {
            Cow::Borrowed(parent_path)
        } else {
            Cow::Owned(format!("{parent_path}.{}", failure.property))
        };

        if !failure.constraints.is_empty() {
            let constraints = failure.constraints.join(", ");
            if path.is_empty() {
                // Struct-level failures have no field to point at.
                out.push(constraints);
            } else {
                out.push(format!("{path}: {constraints}"));
            }
        }

        if !failure.children.is_empty() {
            collect(&failure.children, &path, out);
        }
    }
}

/// Converts a `validator` error tree into [`ValidationFailure`] nodes.
///
/// Nested structs become children, list entries become children named by
/// their index. `validator` keeps fields in a hash map, so siblings are sorted
/// by field name to keep the output stable. Use [`from_validation_errors_in`]
/// when the declared field order is known.
pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<ValidationFailure> {
    from_validation_errors_in(errors, &[])
}

/// Like [`from_validation_errors`], but top-level siblings follow `declared`.
///
/// Fields missing from `declared` come last, by name. Nested levels are
/// sorted by name.
pub fn from_validation_errors_in(
    errors: &ValidationErrors,
    declared: &[&str],
) -> Vec<ValidationFailure> {
    let rank = |name: &str| {
        declared
            .iter()
            .position(|field| *field == name)
            .unwrap_or(declared.len())
    };

    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    entries
        .into_iter()
        .map(|(field, kind)| {
            let name: &str = field;
            let property = match name {
                "__all__" => String::new(),
                name => name.to_string(),
            };
            let mut node = ValidationFailure::new(property);

            match kind {
                ValidationErrorsKind::Field(field_errors) => {
                    node.constraints = field_errors.iter().map(describe).collect();
                }
                ValidationErrorsKind::Struct(nested) => {
                    node.children = from_validation_errors(nested);
                }
                ValidationErrorsKind::List(items) => {
                    node.children = items
                        .iter()
                        .map(|(index, nested)| ValidationFailure {
                            property: index.to_string(),
                            constraints: Vec::new(),
                            children: from_validation_errors(nested),
                        })
                        .collect();
                }
            }

            node
        })
        .collect()
}

/// Human-readable sentence for a single rule violation.
///
/// Uses the rule's own message when one was given, otherwise a default
/// derived from the rule code and its parameters.
fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let param = |name: &str| error.params.get(name).map(|value| value.to_string());

    match &*error.code {
        "required" => "should not be empty".to_string(),
        "email" => "must be an email".to_string(),
        "url" => "must be a URL address".to_string(),
        "regex" => "must match the required format".to_string(),
        "length" => match (param("equal"), param("min"), param("max")) {
            (Some(equal), _, _) => format!("must be exactly {equal} characters"),
            (None, Some(min), Some(max)) => format!("must be between {min} and {max} characters"),
            (None, Some(min), None) => {
                format!("must be longer than or equal to {min} characters")
            }
            (None, None, Some(max)) => {
                format!("must be shorter than or equal to {max} characters")
            }
            (None, None, None) => "has an invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must not be less than {min}"),
            (None, Some(max)) => format!("must not be greater than {max}"),
            (None, None) => "is out of range".to_string(),
        },
        "must_match" => match param("other") {
            Some(other) => format!("must match {}", other.trim_matches('"')),
            None => "must match".to_string(),
        },
        code => format!("failed the {code} check"),
    }
}
