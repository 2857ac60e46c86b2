use thiserror::Error;

/// Errors raised while validating a submitted idea.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdeaError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl IdeaError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            IdeaError::MissingField(field) => field,
        }
    }
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_error_reports_field() {
        let err = IdeaError::MissingField("businessModel");
        assert_eq!(err.field(), "businessModel");
        assert_eq!(err.to_string(), "missing required field: businessModel");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingEnv("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "missing environment variable: OPENAI_API_KEY");

        let err = ConfigError::InvalidValue {
            key: "rate_limit.window_secs",
            message: "must be greater than zero".to_string(),
        };
        assert!(err.to_string().contains("rate_limit.window_secs"));
    }
}
