use thiserror::Error;

/// Errors that abort a notifier run
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed while trying to {operation}: {message}")]
    Auth {
        operation: &'static str,
        message: String,
    },

    #[error("not found while trying to {operation}: {message}")]
    NotFound {
        operation: &'static str,
        message: String,
    },

    #[error("rate limited while trying to {operation}: {message}")]
    RateLimit {
        operation: &'static str,
        message: String,
    },

    #[error("GitHub returned {status} while trying to {operation}: {message}")]
    Api {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("failed to {operation}")]
    Transport {
        operation: &'static str,
        #[source]
        source: octocrab::Error,
    },
}

impl NotifierError {
    /// Classify a GitHub client failure by its HTTP status
    pub fn from_github(operation: &'static str, err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                let message = source.message.clone();
                classify_status(operation, source.status_code.as_u16(), message)
            }
            other => NotifierError::Transport {
                operation,
                source: other,
            },
        }
    }

    /// Classify a non-success HTTP response
    pub fn from_status(operation: &'static str, status: u16, message: String) -> Self {
        classify_status(operation, status, message)
    }
}

fn classify_status(operation: &'static str, status: u16, message: String) -> NotifierError {
    match status {
        401 => NotifierError::Auth { operation, message },
        403 if mentions_rate_limit(&message) => NotifierError::RateLimit { operation, message },
        403 => NotifierError::Auth { operation, message },
        404 => NotifierError::NotFound { operation, message },
        429 => NotifierError::RateLimit { operation, message },
        _ => NotifierError::Api {
            operation,
            status,
            message,
        },
    }
}

// GitHub reports primary and secondary rate limits as 403 with this wording
fn mentions_rate_limit(message: &str) -> bool {
    message.to_ascii_lowercase().contains("rate limit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_auth() {
        let err = classify_status("list comments", 401, "Bad credentials".to_string());
        assert!(matches!(err, NotifierError::Auth { .. }));

        let err = classify_status("post comment", 403, "Resource not accessible".to_string());
        assert!(matches!(err, NotifierError::Auth { .. }));
    }

    #[test]
    fn test_classify_rate_limit() {
        let err = classify_status(
            "list changed files",
            403,
            "API rate limit exceeded for installation".to_string(),
        );
        assert!(matches!(err, NotifierError::RateLimit { .. }));

        let err = classify_status("post comment", 429, "Too Many Requests".to_string());
        assert!(matches!(err, NotifierError::RateLimit { .. }));
    }

    #[test]
    fn test_classify_other_status() {
        let err = classify_status("post comment", 422, "Validation Failed".to_string());
        match err {
            NotifierError::Api { status, .. } => assert_eq!(status, 422),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = classify_status("list comments", 404, "Not Found".to_string());
        assert!(matches!(err, NotifierError::NotFound { .. }));
    }

    #[test]
    fn test_display_names_operation() {
        let err = classify_status("list comments", 404, "Not Found".to_string());
        assert_eq!(
            err.to_string(),
            "not found while trying to list comments: Not Found"
        );
    }
}
