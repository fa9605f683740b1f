//! Authentication configuration

use chrono::Duration;

/// Authentication configuration
///
/// Owned by the application and injected through router state. The token
/// codec takes the signing key per call and holds no key state of its own.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub signing_key: String,
    pub issuer: String,
    pub token_ttl: Duration,
}
