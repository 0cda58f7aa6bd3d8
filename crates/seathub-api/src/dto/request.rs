//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error (400) rather than a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Attendee name.
    #[serde(default)]
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    pub name: Option<String>,
    /// Attendee email.
    #[serde(default)]
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> RegisterRequest {
        serde_json::from_str(body).expect("parse")
    }

    #[test]
    fn test_complete_request_is_valid() {
        let req = parse(r#"{"name":"Asha","email":"a@example.com"}"#);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_and_empty_fields_are_invalid() {
        assert!(parse(r#"{"email":"a@example.com"}"#).validate().is_err());
        assert!(parse(r#"{"name":"Asha"}"#).validate().is_err());
        assert!(parse(r#"{"name":"","email":"a@example.com"}"#).validate().is_err());
        assert!(parse(r#"{"name":null,"email":"a@example.com"}"#).validate().is_err());
        assert!(parse("{}").validate().is_err());
    }
}
