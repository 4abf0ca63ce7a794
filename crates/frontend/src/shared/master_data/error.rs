use thiserror::Error;

/// Failure of one REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// `message` or `error` from the JSON body, when the server sent one
        message: Option<String>,
    },

    /// `DELETE` answered 400: the record is referenced elsewhere.
    #[error("record is in use")]
    InUse { message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a toast: the server's own explanation, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Ordered per-field validation messages, keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.contains(field) {
            self.fields.push((field, message.into()));
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.fields.retain(|(f, _)| *f != field);
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn first_field(&self) -> Option<&'static str> {
        self.fields.first().map(|(f, _)| *f)
    }

    pub fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Why a save did not reach (or did not survive) the server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    #[error("validation failed: {}", .0.summary())]
    Validation(ValidationErrors),

    /// Another record in scope already carries this name
    #[error("{message}")]
    Duplicate {
        field: &'static str,
        message: &'static str,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::Status {
            status: 500,
            message: Some("DB Error".into()),
        };
        assert_eq!(err.user_message("Something went wrong!"), "DB Error");

        let err = ApiError::Transport("offline".into());
        assert_eq!(err.user_message("Something went wrong!"), "Something went wrong!");
    }

    #[test]
    fn test_validation_errors_keep_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.push("CGST", "CGST is required");
        errors.push("CGST", "CGST must be a valid number");
        errors.push("SGST", "SGST is required");
        assert_eq!(errors.first_field(), Some("CGST"));
        assert_eq!(errors.summary(), "CGST is required, SGST is required");
    }

    #[test]
    fn test_duplicate_message() {
        let err = SaveError::Duplicate {
            field: "BrandName",
            message: "Brand Name already exists!",
        };
        assert_eq!(err.to_string(), "Brand Name already exists!");
    }
}
