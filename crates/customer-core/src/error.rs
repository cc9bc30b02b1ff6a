//! Error types for the customer service

use customer_types::FieldViolation;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, CustomerError>;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Id mismatch: path {path}, body {}", display_id(.body))]
    IdMismatch { path: Uuid, body: Option<Uuid> },

    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    #[error("Customer already exists: {0}")]
    AlreadyExists(Uuid),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CustomerError {
    /// Single-violation shorthand
    pub fn invalid(field: &str, message: &str) -> Self {
        CustomerError::Validation(vec![FieldViolation::new(field, message)])
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn display_id(id: &Option<Uuid>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "<missing>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = CustomerError::Validation(vec![
            FieldViolation::new("firstName", "is required"),
            FieldViolation::new("email", "is not a valid email address"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: firstName: is required; email: is not a valid email address"
        );
    }
}
