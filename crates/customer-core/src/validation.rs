//! Customer validation
//!
//! Explicit checks run before anything is written. Every violated constraint is
//! collected so a client sees all problems with a payload at once.

use crate::error::{CustomerError, Result};
use customer_types::{Customer, CustomerPayload, FieldViolation};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// One `@`, something on each side, no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Collect every constraint the payload violates. Empty means valid.
pub fn violations(payload: &CustomerPayload) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    require(&mut violations, "firstName", payload.first_name.as_deref());
    require(&mut violations, "lastName", payload.last_name.as_deref());

    match payload.email.as_deref() {
        Some(email) if !email.trim().is_empty() => {
            if !is_valid_email(email) {
                violations.push(FieldViolation::new(
                    "email",
                    "is not a valid email address",
                ));
            }
        }
        _ => violations.push(FieldViolation::new("email", "is required")),
    }

    require(&mut violations, "phoneNumber", payload.phone_number.as_deref());

    violations
}

fn require(violations: &mut Vec<FieldViolation>, field: &str, value: Option<&str>) {
    if value.map(|v| v.trim().is_empty()).unwrap_or(true) {
        violations.push(FieldViolation::new(field, "is required"));
    }
}

/// Validate a payload and build the customer it describes.
///
/// A payload without an id gets a freshly generated one.
pub fn validate_customer(payload: CustomerPayload) -> Result<Customer> {
    let found = violations(&payload);
    if !found.is_empty() {
        return Err(CustomerError::Validation(found));
    }

    Ok(Customer {
        id: payload.id.unwrap_or_else(Uuid::new_v4),
        first_name: payload.first_name.unwrap_or_default(),
        middle_name: payload.middle_name,
        last_name: payload.last_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        phone_number: payload.phone_number.unwrap_or_default(),
    })
}

/// Parse a path segment into a customer id
pub fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| CustomerError::invalid("id", "is not a valid identifier"))
}
