use thiserror::Error;

/// Errors returned by the Google Places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Places API error ({status}): {message}")]
    Api {
        status: u16,
        /// Canonical status string from the error body, e.g. `RESOURCE_EXHAUSTED`.
        code: Option<String>,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Coarse classification of a provider failure, used by the transport layers
/// to choose a client-facing status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSignal {
    Quota,
    Auth,
    NotFound,
    Other,
}

impl PlacesError {
    #[must_use]
    pub fn signal(&self) -> FailureSignal {
        let Self::Api {
            status,
            code,
            message,
        } = self
        else {
            return FailureSignal::Other;
        };

        let code = code.as_deref().unwrap_or_default();
        let message = message.to_ascii_lowercase();

        if *status == 429 || code == "RESOURCE_EXHAUSTED" || message.contains("quota") {
            FailureSignal::Quota
        } else if matches!(status, 401 | 403)
            || matches!(code, "PERMISSION_DENIED" | "UNAUTHENTICATED")
            || message.contains("api key")
        {
            FailureSignal::Auth
        } else if *status == 404 || code == "NOT_FOUND" {
            FailureSignal::NotFound
        } else {
            FailureSignal::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: Option<&str>, message: &str) -> PlacesError {
        PlacesError::Api {
            status,
            code: code.map(str::to_owned),
            message: message.to_owned(),
        }
    }

    #[test]
    fn quota_signals() {
        assert_eq!(api(429, None, "slow down").signal(), FailureSignal::Quota);
        assert_eq!(
            api(403, Some("RESOURCE_EXHAUSTED"), "x").signal(),
            FailureSignal::Quota
        );
        assert_eq!(
            api(400, None, "Daily Quota exceeded").signal(),
            FailureSignal::Quota
        );
    }

    #[test]
    fn auth_signals() {
        assert_eq!(api(403, None, "denied").signal(), FailureSignal::Auth);
        assert_eq!(
            api(400, Some("INVALID_ARGUMENT"), "API key not valid. Please pass a valid API key.")
                .signal(),
            FailureSignal::Auth
        );
        assert_eq!(
            api(400, Some("UNAUTHENTICATED"), "x").signal(),
            FailureSignal::Auth
        );
    }

    #[test]
    fn not_found_and_other_signals() {
        assert_eq!(
            api(404, Some("NOT_FOUND"), "no such place").signal(),
            FailureSignal::NotFound
        );
        assert_eq!(api(500, None, "boom").signal(), FailureSignal::Other);
        let invalid = PlacesError::InvalidBaseUrl {
            url: "x".into(),
            reason: "y".into(),
        };
        assert_eq!(invalid.signal(), FailureSignal::Other);
    }
}
