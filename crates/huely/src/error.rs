use serde::Deserialize;
use thiserror::Error;

/// Top-level error type for the `huely` crate.
///
/// Covers every failure mode across the three surfaces: the CLIP v2
/// resource API, bridge discovery, and the pairing flow.
#[derive(Debug, Error)]
pub enum Error {
    // ── CLIP API ────────────────────────────────────────────────────
    /// Non-2xx response from the bridge, with any server-emitted details.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 2xx response whose `data` array was empty where a single element
    /// was required.
    #[error("no data returned from the bridge")]
    EmptyResponse,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, TLS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Discovery ───────────────────────────────────────────────────
    /// mDNS discovery did not find a bridge before the deadline.
    #[error("discovery via mDNS timed out")]
    DiscoveryTimeout,

    /// No bridge found (resolver drained, or the cloud directory was empty).
    #[error("no bridge found")]
    BridgeNotFound,

    /// The cloud discovery endpoint rate-limited us.
    #[error("too many attempts to discover the bridge via the cloud endpoint")]
    TooManyAttempts,

    /// mDNS daemon or browse failure.
    #[error("mDNS error: {0}")]
    Mdns(String),

    // ── Pairing ─────────────────────────────────────────────────────
    /// The pairing endpoint returned nothing we could decode.
    #[error("unable to reach the bridge, verify that the IP is correct")]
    BridgeUnreachable,

    // ── Configuration ───────────────────────────────────────────────
    /// Invalid construction arguments or an unparseable root CA bundle.
    #[error("configuration error: {0}")]
    Config(String),

    /// Operation the bridge (or this library) does not support.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl Error {
    /// The API error category, if this is a recognized non-2xx response.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api(e) => e.kind(),
            _ => None,
        }
    }

    /// Returns `true` if the bridge rejected the application key (HTTP 403).
    pub fn is_forbidden(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Forbidden)
    }

    /// Returns `true` if the addressed resource does not exist (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::NotFound)
    }

    /// Returns `true` if the bridge rate-limited the request (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::TooManyRequests)
    }
}

/// Category of a non-2xx CLIP response, derived solely from the status code.
///
/// This is the pattern-matchable capability: callers branch on the kind
/// instead of parsing rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403 (wrong application key).
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 409.
    Conflict,
    /// HTTP 429.
    TooManyRequests,
    /// HTTP 500.
    InternalServerError,
    /// HTTP 503.
    ServiceUnavailable,
}

impl ApiErrorKind {
    /// Map a status code to its category. Unrecognized codes have none.
    pub fn from_status(status_code: u16) -> Option<Self> {
        match status_code {
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            409 => Some(Self::Conflict),
            429 => Some(Self::TooManyRequests),
            500 => Some(Self::InternalServerError),
            503 => Some(Self::ServiceUnavailable),
            _ => None,
        }
    }
}

/// An error returned by the CLIP v2 API.
///
/// Carries the HTTP status code, the status phrase, and the
/// server-emitted error descriptions joined into one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status_code: u16,
    pub status: String,
    pub description: String,
}

impl ApiError {
    /// Build an `ApiError` from a response status and raw body.
    ///
    /// Every CLIP error status shares the `{"errors":[{"description"}]}`
    /// body shape, so a single decode replaces per-status extraction.
    /// An undecodable body simply yields an empty description.
    pub(crate) fn from_parts(status: reqwest::StatusCode, body: &str) -> Self {
        let description = serde_json::from_str::<ErrorBody>(body)
            .map(|b| join_descriptions(&b.errors))
            .unwrap_or_default();

        Self {
            status_code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_owned(),
            description,
        }
    }

    /// The category of this error, if the status code is a recognized one.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        ApiErrorKind::from_status(self.status_code)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.description.is_empty() {
            return write!(f, "hue api error ({}): {}", self.status_code, self.description);
        }

        // Fixed phrases for the common status codes.
        match self.status_code {
            401 => write!(f, "hue api error (401): unauthorized - invalid or missing application key"),
            403 => write!(f, "hue api error (403): forbidden - wrong API key"),
            404 => write!(f, "hue api error (404): resource not found"),
            409 => write!(f, "hue api error (409): conflict"),
            429 => write!(f, "hue api error (429): too many requests - rate limited"),
            500 => write!(f, "hue api error (500): internal server error"),
            503 => write!(f, "hue api error (503): service unavailable"),
            _ => write!(f, "hue api error ({}): {}", self.status_code, self.status),
        }
    }
}

impl std::error::Error for ApiError {}

/// One entry of the server-emitted `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub description: Option<String>,
}

/// The body shape shared by every CLIP error status (and the `errors`
/// half of the success envelope).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// Join non-empty descriptions with `"; "`, preserving server order.
pub(crate) fn join_descriptions(errors: &[ErrorDetail]) -> String {
    errors
        .iter()
        .filter_map(|e| e.description.as_deref())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_exactly_one_category() {
        let table = [
            (401, ApiErrorKind::Unauthorized),
            (403, ApiErrorKind::Forbidden),
            (404, ApiErrorKind::NotFound),
            (409, ApiErrorKind::Conflict),
            (429, ApiErrorKind::TooManyRequests),
            (500, ApiErrorKind::InternalServerError),
            (503, ApiErrorKind::ServiceUnavailable),
        ];

        for (code, expected) in table {
            assert_eq!(ApiErrorKind::from_status(code), Some(expected));
            // No other category claims this code.
            for (other_code, other) in table {
                if other_code != code {
                    assert_ne!(ApiErrorKind::from_status(code), Some(other));
                }
            }
        }

        assert_eq!(ApiErrorKind::from_status(200), None);
        assert_eq!(ApiErrorKind::from_status(418), None);
    }

    #[test]
    fn display_uses_description_when_present() {
        let err = ApiError {
            status_code: 404,
            status: "Not Found".into(),
            description: "light not found".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("(404)"));
        assert!(rendered.contains("light not found"));
    }

    #[test]
    fn display_fixed_phrases_without_description() {
        let cases = [
            (403, "wrong API key"),
            (404, "resource not found"),
            (429, "rate limited"),
            (401, "unauthorized"),
            (409, "conflict"),
            (500, "internal server error"),
            (503, "service unavailable"),
        ];
        for (code, phrase) in cases {
            let err = ApiError {
                status_code: code,
                status: String::new(),
                description: String::new(),
            };
            assert!(
                err.to_string().contains(phrase),
                "status {code} should render {phrase:?}, got {:?}",
                err.to_string()
            );
        }
    }

    #[test]
    fn display_falls_back_to_status_phrase() {
        let err = ApiError {
            status_code: 418,
            status: "I'm a teapot".into(),
            description: String::new(),
        };
        assert!(err.to_string().contains("I'm a teapot"));
    }

    #[test]
    fn descriptions_joined_in_order_skipping_empties() {
        let errors = vec![
            ErrorDetail { description: Some("first".into()) },
            ErrorDetail { description: Some(String::new()) },
            ErrorDetail { description: None },
            ErrorDetail { description: Some("second".into()) },
        ];
        assert_eq!(join_descriptions(&errors), "first; second");
    }

    #[test]
    fn from_parts_extracts_typed_body() {
        let err = ApiError::from_parts(
            reqwest::StatusCode::FORBIDDEN,
            r#"{"errors":[{"description":"wrong key"}],"data":[]}"#,
        );
        assert_eq!(err.status_code, 403);
        assert_eq!(err.description, "wrong key");
        assert_eq!(err.kind(), Some(ApiErrorKind::Forbidden));
        // The typed body wins over the fixed phrase.
        assert!(err.to_string().contains("wrong key"));
        assert!(!err.to_string().contains("wrong API key"));
    }

    #[test]
    fn from_parts_tolerates_unparseable_body() {
        let err = ApiError::from_parts(reqwest::StatusCode::NOT_FOUND, "<html>nope</html>");
        assert!(err.description.is_empty());
        assert!(err.to_string().contains("resource not found"));
    }
}
