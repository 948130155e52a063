//! Form values and client-side validation.

use crate::config::FormLimits;
use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Raw field values as read from the form, untrimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Look up a field by its form name
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

/// Validated, trimmed submission body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Syntactic check only: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Trim the fields and run the rules in order, stopping at the first failure.
///
/// Order: required fields, email shape, name length, message minimum,
/// message maximum. Lengths count chars.
pub fn validate(fields: &FormFields, limits: &FormLimits) -> Result<ContactRequest, ValidationError> {
    let trimmed = FormFields::new(fields.name.trim(), fields.email.trim(), fields.message.trim());

    for field in &limits.required_fields {
        if let Some(value) = trimmed.get(field) {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field.clone()));
            }
        }
    }

    if !is_valid_email(&trimmed.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if trimmed.name.chars().count() > limits.max_name_length {
        return Err(ValidationError::NameTooLong { max: limits.max_name_length });
    }

    let message_len = trimmed.message.chars().count();
    if message_len < limits.min_message_length {
        return Err(ValidationError::MessageTooShort { min: limits.min_message_length });
    }
    if message_len > limits.max_message_length {
        return Err(ValidationError::MessageTooLong { max: limits.max_message_length });
    }

    Ok(ContactRequest {
        name: trimmed.name,
        email: trimmed.email,
        message: trimmed.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(message: &str) -> FormFields {
        FormFields::new("Ada", "ada@example.com", message)
    }

    #[test]
    fn test_trims_values() {
        let input = FormFields::new("  Ada ", "\tada@example.com\n", "  hello there, world  ");
        let req = validate(&input, &FormLimits::default()).unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "ada@example.com");
        assert_eq!(req.message, "hello there, world");
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        let limits = FormLimits::default();
        for (input, missing) in [
            (FormFields::new("", "a@b.co", "long enough text"), "name"),
            (FormFields::new("Ada", "   ", "long enough text"), "email"),
            (FormFields::new("Ada", "a@b.co", ""), "message"),
        ] {
            assert_eq!(
                validate(&input, &limits),
                Err(ValidationError::MissingField(missing.to_string()))
            );
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("has space@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_invalid_email_checked_before_lengths() {
        let input = FormFields::new("x".repeat(500), "nope", "short");
        assert_eq!(
            validate(&input, &FormLimits::default()),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_name_length_boundary() {
        let limits = FormLimits::default();
        let ok = FormFields::new("n".repeat(100), "a@b.co", "long enough text");
        assert!(validate(&ok, &limits).is_ok());

        let too_long = FormFields::new("n".repeat(101), "a@b.co", "long enough text");
        assert_eq!(
            validate(&too_long, &limits),
            Err(ValidationError::NameTooLong { max: 100 })
        );
    }

    #[test]
    fn test_message_min_boundary_is_inclusive() {
        let limits = FormLimits::default();
        assert!(validate(&fields(&"m".repeat(10)), &limits).is_ok());
        assert_eq!(
            validate(&fields(&"m".repeat(9)), &limits),
            Err(ValidationError::MessageTooShort { min: 10 })
        );
    }

    #[test]
    fn test_message_max_boundary_is_inclusive() {
        let limits = FormLimits::default();
        assert!(validate(&fields(&"m".repeat(1000)), &limits).is_ok());
        assert_eq!(
            validate(&fields(&"m".repeat(1001)), &limits),
            Err(ValidationError::MessageTooLong { max: 1000 })
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let limits = FormLimits::default();
        // 10 chars, 30 bytes
        assert!(validate(&fields(&"日".repeat(10)), &limits).is_ok());
    }

    #[test]
    fn test_custom_limits() {
        let limits = FormLimits {
            min_message_length: 2,
            max_message_length: 4,
            max_name_length: 3,
            required_fields: vec!["name".into(), "email".into(), "message".into()],
        };
        assert!(validate(&FormFields::new("Bo", "b@o.io", "hey"), &limits).is_ok());
        assert_eq!(
            validate(&FormFields::new("Bob", "b@o.io", "hello"), &limits),
            Err(ValidationError::MessageTooLong { max: 4 })
        );
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let req = validate(&fields("hello there!"), &FormLimits::default()).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "hello there!"
            })
        );
    }
}
