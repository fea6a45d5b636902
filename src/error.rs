/// Error types shared by every collaborator in the application
///
/// Collaborators propagate `Error` with `?`. The UI layer turns it into a
/// `String` before putting it in a `Message`, because messages must be `Clone`.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the hosted backend or email API
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    #[error("catalog database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image could not be processed: {0}")]
    Image(#[from] image::ImageError),

    #[error("configuration error: {0}")]
    Config(String),

    /// An operation that needs a signed-in user was attempted anonymously
    #[error("you need to be signed in to do that")]
    NotSignedIn,

    /// The active backend variant does not provide this collaborator
    #[error("{0} is not available in offline mode")]
    Unavailable(&'static str),

    /// A blocking worker panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `Api` error from a response body.
    ///
    /// PostgREST, GoTrue and storage all report errors as JSON, but under
    /// different keys; fall back to the raw body when none is present.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error_description", "msg", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "request rejected".to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Error::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgrest_message_is_extracted() {
        let err = Error::from_response_body(
            400,
            r#"{"code":"23502","message":"null value in column \"name\"","details":null}"#,
        );
        assert_eq!(err.to_string(), "null value in column \"name\" (status 400)");
    }

    #[test]
    fn test_auth_error_description_is_extracted() {
        let err = Error::from_response_body(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid login credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plain_body_falls_back_to_text() {
        let err = Error::from_response_body(502, "  Bad Gateway ");
        assert_eq!(err.to_string(), "Bad Gateway (status 502)");

        let err = Error::from_response_body(500, "");
        assert_eq!(err.to_string(), "request rejected (status 500)");
    }
}
