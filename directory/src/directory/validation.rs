use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::{
    consts::consts::MIN_FIELD_LENGTH,
    model::employee::{normalize_email, Employee, EmployeeInput},
};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Validated fields, in the order they are checked
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    LastName,
    FirstName,
    Email,
    Position,
}

#[derive(Error, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Checks every field of `input` and returns all failures, at most one per field.
/// An empty result means the candidate can be added next to `existing`.
#[tracing::instrument(skip(input, existing))]
pub fn validate(input: &EmployeeInput, existing: &[Employee]) -> Vec<ValidationError> {
    [
        validate_required_text(Field::LastName, &input.last_name, "Le nom est requis"),
        validate_required_text(Field::FirstName, &input.first_name, "Le prénom est requis"),
        validate_email(&input.email, existing),
        validate_required_text(Field::Position, &input.position, "Le poste est requis"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn validate_required_text(
    field: Field,
    value: &str,
    required_message: &str,
) -> Option<ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Some(ValidationError::new(field, required_message));
    }

    if value.chars().count() < MIN_FIELD_LENGTH {
        return Some(ValidationError::new(
            field,
            format!("Minimum {} caractères requis", MIN_FIELD_LENGTH),
        ));
    }

    None
}

fn validate_email(email: &str, existing: &[Employee]) -> Option<ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Some(ValidationError::new(Field::Email, "L'email est requis"));
    }

    if !is_valid_email(email) {
        return Some(ValidationError::new(Field::Email, "Format d'email invalide"));
    }

    let email = normalize_email(email);

    // Stored records may come from an older document, compare case-insensitively
    if existing
        .iter()
        .any(|employee| employee.email.to_lowercase() == email)
    {
        return Some(ValidationError::new(
            Field::Email,
            "Cet email est déjà utilisé",
        ));
    }

    None
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
