use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, connection refused, CORS...).
    Network,
    /// The backend answered with a status the call does not accept.
    UnexpectedStatus,
    /// A response body or stored credential could not be decoded.
    Decode,
    /// Form input failed its schema.
    ValidationError,
    /// Persistent credential storage is unavailable or failed.
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::UnexpectedStatus => write!(f, "UnexpectedStatus"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured error shared by the client library and the UI.
///
/// `message` is always the fixed human-readable text the UI shows; the
/// underlying cause is logged where the error is created and never carried
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Network, message)
    }

    pub fn unexpected_status(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::UnexpectedStatus, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Decode, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Storage, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// The message for one form field, if validation flagged it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::ValidationError
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_has_correct_kind() {
        let err = AppError::network("An error has occurred during login");
        assert_eq!(err.kind, AppErrorKind::Network);
        assert_eq!(err.message, "An error has occurred during login");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_exposes_field_messages() {
        let mut fields = HashMap::new();
        fields.insert("patientId".to_string(), "Please select a patient".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert!(err.is_validation());
        assert_eq!(err.field_error("patientId"), Some("Please select a patient"));
        assert_eq!(err.field_error("doctorId"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unexpected_status("An error has occurred while deleting doctor");
        assert_eq!(
            format!("{}", err),
            "UnexpectedStatus: An error has occurred while deleting doctor"
        );
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&AppError::decode("bad body")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
