//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// Malformed-structure and bad-signature failures are distinct variants so
/// logs and metrics can tell them apart, but they render identically at the
/// HTTP boundary: an external caller must not learn which verification step
/// rejected a forged token. Expiry renders distinctly since it carries no
/// forgery-relevant information.
#[derive(Debug)]
pub enum AuthError {
    /// Claims could not be serialized or signed at generation time
    TokenEncoding,
    /// Token structure unparseable
    MalformedToken,
    /// Signature does not match the recomputed value
    InvalidSignature,
    /// Signature valid, but the token is past its expiry
    TokenExpired,
    /// No token or identity present where one was required
    MissingCredential,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::TokenEncoding => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ENCODING_ERROR",
                "Failed to issue token",
            ),
            AuthError::MalformedToken | AuthError::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", "Invalid token")
            }
            AuthError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", "Token expired")
            }
            AuthError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "MISSING_CREDENTIAL",
                "Authorization required",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
