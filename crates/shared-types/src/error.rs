use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured application error shared by the form core and the UI.
///
/// `field_errors` is keyed by form field name (`origin`, `return_date`, ...)
/// and ordered so the first message shown to a user is stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation error carrying a single field message.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = BTreeMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    /// Message for a single field, if that field failed validation.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Text suitable for a toast.
    ///
    /// Validation errors surface their first field message; anything else
    /// falls back to the top-level message, or a generic one when empty.
    pub fn friendly_message(&self) -> String {
        if let Some(first) = self.field_errors.values().next() {
            return first.clone();
        }
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::bad_request(format!("Invalid site config: {}", err.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_has_validation_kind() {
        let err = AppError::field("origin", "Enter a pickup location");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("origin"), Some("Enter a pickup location"));
        assert_eq!(err.field_error("destination"), None);
    }

    #[test]
    fn friendly_message_prefers_first_field_message() {
        let mut fields = BTreeMap::new();
        fields.insert("origin".to_string(), "Enter a pickup location".to_string());
        fields.insert("destination".to_string(), "Enter a drop-off location".to_string());
        let err = AppError::validation("Search is incomplete", fields);
        // BTreeMap orders "destination" before "origin"
        assert_eq!(err.friendly_message(), "Enter a drop-off location");
    }

    #[test]
    fn friendly_message_falls_back_to_message() {
        let err = AppError::bad_request("Invalid site config: expected a value");
        assert_eq!(err.friendly_message(), "Invalid site config: expected a value");
    }

    #[test]
    fn friendly_message_generic_when_empty() {
        assert_eq!(
            AppError::bad_request("").friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::bad_request("bad input");
        assert_eq!(format!("{}", err), "BadRequest: bad input");
    }

    #[test]
    fn toml_error_converts_to_bad_request() {
        let parse = toml::from_str::<toml::Value>("brand = ").unwrap_err();
        let err = AppError::from(parse);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.starts_with("Invalid site config"));
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::field("return_date", "Return must be on or after departure");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
