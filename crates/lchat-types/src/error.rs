use thiserror::Error;

/// Why a turn produced no assistant reply.
///
/// Every variant is recoverable: the chat loop reports it and prompts
/// again. None of them add an assistant line to the history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("could not connect to {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint error: {0}")]
    Endpoint(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("Assistant did not provide a response")]
    EmptyResponse,
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Illegal chat session state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    InvalidTransition { state: String, action: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_display() {
        assert_eq!(
            CompletionError::EmptyResponse.to_string(),
            "Assistant did not provide a response"
        );
    }

    #[test]
    fn test_connection_error_display() {
        let err = CompletionError::Connection {
            endpoint: "http://localhost:11434/v1/completions".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("localhost:11434"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_endpoint_error_display() {
        let err = CompletionError::Endpoint("bad model".to_string());
        assert_eq!(err.to_string(), "endpoint error: bad model");
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::InvalidTransition {
            state: "prompting".to_string(),
            action: "render a reply".to_string(),
        };
        assert_eq!(err.to_string(), "cannot render a reply while prompting");
    }
}
