use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 單次抓取的失敗，由 `StatusSource` 回傳，尚未帶有迭代編號。
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    #[error("failed to read response body: {0}")]
    Read(#[source] BoxError),
}

#[derive(Error, Debug)]
pub enum PollerError {
    #[error("Request to {endpoint} failed on iteration {iteration}: {source}")]
    RequestFailed {
        iteration: u32,
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("Reading response from {endpoint} failed on iteration {iteration}: {source}")]
    ReadFailed {
        iteration: u32,
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid configuration for '{field}' ('{value}'): {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

impl PollerError {
    pub fn from_fetch(err: FetchError, iteration: u32, endpoint: &str) -> Self {
        match err {
            FetchError::Request(source) => PollerError::RequestFailed {
                iteration,
                endpoint: endpoint.to_string(),
                source,
            },
            FetchError::Read(source) => PollerError::ReadFailed {
                iteration,
                endpoint: endpoint.to_string(),
                source,
            },
        }
    }

    /// The iteration the run stopped on, if the error came from the loop.
    pub fn iteration(&self) -> Option<u32> {
        match self {
            PollerError::RequestFailed { iteration, .. }
            | PollerError::ReadFailed { iteration, .. } => Some(*iteration),
            PollerError::InvalidConfig { .. } => None,
        }
    }

    /// Display text followed by every deeper cause, e.g. the connect error
    /// hidden behind reqwest's "error sending request".
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        // 直接的 source 已經包含在 Display 裡
        let mut cause = std::error::Error::source(self).and_then(|s| s.source());
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PollerError::InvalidConfig { .. } => 1,
            PollerError::RequestFailed { .. } => 2,
            PollerError::ReadFailed { .. } => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PollerError::RequestFailed { endpoint, .. } => {
                format!("Could not reach the status endpoint {}", endpoint)
            }
            PollerError::ReadFailed { endpoint, .. } => {
                format!("The status endpoint {} closed the response early", endpoint)
            }
            PollerError::InvalidConfig { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PollerError::RequestFailed { .. } => {
                "Check that the DPM service is running and listening on port 9192"
            }
            PollerError::ReadFailed { .. } => {
                "Check the DPM service logs for crashes or dropped connections"
            }
            PollerError::InvalidConfig { .. } => "Fix the poller constants and rebuild",
        }
    }
}

pub type Result<T> = std::result::Result<T, PollerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("error sending request for url (http://localhost:9192/DPM/STATUS)")]
    struct SendError(#[source] std::io::Error);

    fn io_source(msg: &str) -> BoxError {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_from_fetch_keeps_kind_and_iteration() {
        let err = PollerError::from_fetch(
            FetchError::Request(io_source("connection refused")),
            7,
            "http://localhost:9192/DPM/STATUS",
        );
        assert!(matches!(err, PollerError::RequestFailed { iteration: 7, .. }));
        assert_eq!(err.iteration(), Some(7));
        assert!(err.to_string().contains("connection refused"));

        let err = PollerError::from_fetch(FetchError::Read(io_source("eof")), 3, "http://x");
        assert!(matches!(err, PollerError::ReadFailed { iteration: 3, .. }));
    }

    #[test]
    fn test_exit_codes_signal_failure() {
        let request = PollerError::from_fetch(FetchError::Request(io_source("a")), 1, "http://x");
        let read = PollerError::from_fetch(FetchError::Read(io_source("b")), 1, "http://x");
        let config = PollerError::InvalidConfig {
            field: "endpoint".to_string(),
            value: String::new(),
            reason: "URL cannot be empty".to_string(),
        };

        assert_eq!(request.exit_code(), 2);
        assert_eq!(read.exit_code(), 3);
        assert_eq!(config.exit_code(), 1);
        assert_eq!(config.iteration(), None);
    }

    #[test]
    fn test_report_includes_root_cause() {
        let send = SendError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "tcp connect error: Connection refused",
        ));
        let err = PollerError::from_fetch(
            FetchError::Request(Box::new(send)),
            1,
            "http://localhost:9192/DPM/STATUS",
        );

        assert!(!err.to_string().contains("Connection refused"));
        assert_eq!(
            err.report(),
            "Request to http://localhost:9192/DPM/STATUS failed on iteration 1: \
             error sending request for url (http://localhost:9192/DPM/STATUS): \
             tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_report_without_nested_cause_is_display() {
        let err = PollerError::from_fetch(FetchError::Read(io_source("eof")), 2, "http://x");
        assert_eq!(err.report(), err.to_string());
    }

    #[test]
    fn test_user_facing_messages() {
        let request = PollerError::from_fetch(
            FetchError::Request(io_source("refused")),
            1,
            "http://localhost:9192/DPM/STATUS",
        );
        assert_eq!(
            request.user_friendly_message(),
            "Could not reach the status endpoint http://localhost:9192/DPM/STATUS"
        );
        assert!(request.recovery_suggestion().contains("9192"));

        let read = PollerError::from_fetch(FetchError::Read(io_source("eof")), 5, "http://x");
        assert_eq!(
            read.user_friendly_message(),
            "The status endpoint http://x closed the response early"
        );
        assert!(read.recovery_suggestion().contains("dropped connections"));

        let config = PollerError::InvalidConfig {
            field: "iterations".to_string(),
            value: "1..1".to_string(),
            reason: "Range must contain at least one value".to_string(),
        };
        assert_eq!(
            config.user_friendly_message(),
            "Invalid setting 'iterations': Range must contain at least one value"
        );
        assert_eq!(config.recovery_suggestion(), "Fix the poller constants and rebuild");
    }
}
