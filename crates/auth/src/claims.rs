//! User token claims types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in a signed user token
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject (user ID, decimal string)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

impl UserClaims {
    /// Build claims for `user_id`, issued at `now` and expiring `expiry` later.
    ///
    /// `expiry` may be zero or negative; the resulting claims are then
    /// immediately or already expired and verification will reject them.
    pub(crate) fn new(user_id: i64, issuer: &str, now: DateTime<Utc>, expiry: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + expiry).timestamp(),
            iss: issuer.to_string(),
        }
    }
}
