//! Customer types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Customer as submitted by a client.
///
/// Every attribute is optional here so that a missing field is reported as a
/// validation violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl CustomerPayload {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            middle_name: None,
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            phone_number: Some(phone_number.into()),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_uses_camel_case_fields() {
        let customer = Customer {
            id: Uuid::nil(),
            first_name: "Alice".to_string(),
            middle_name: None,
            last_name: "Smith".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "1112223333".to_string(),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["firstName"], "Alice");
        assert!(value["middleName"].is_null());
        assert_eq!(value["phoneNumber"], "1112223333");
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: CustomerPayload = serde_json::from_str(r#"{"firstName":"Bob"}"#).unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Bob"));
        assert!(payload.id.is_none());
        assert!(payload.email.is_none());
    }
}
