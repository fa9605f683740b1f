//! User token generation and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::UserClaims;
use crate::error::AuthError;
use crate::types::User;

/// Generate a signed token for `user`, expiring `expiry` from now.
///
/// The signing key is supplied per call; the codec keeps no key state.
/// `expiry` may be zero or negative: generation still succeeds and the
/// resulting token is rejected as expired on verification.
pub fn generate_user_token(
    user: &User,
    signing_key: &[u8],
    expiry: Duration,
    issuer: &str,
) -> Result<String, AuthError> {
    if signing_key.is_empty() {
        return Err(AuthError::TokenEncoding);
    }

    let claims = UserClaims::new(user.id, issuer, Utc::now(), expiry);
    let header = Header::new(Algorithm::HS256);

    encode(&header, &claims, &EncodingKey::from_secret(signing_key)).map_err(|e| {
        tracing::error!(error = %e, "failed to sign user token");
        AuthError::TokenEncoding
    })
}

/// Verify `token` against `signing_key` and recover the identity it carries.
///
/// The signature is checked before any claim value is trusted (the
/// underlying library verifies it in constant time against the recomputed
/// value before deserializing claims). Expiry is enforced with zero leeway.
pub fn parse_user_from_token(token: &str, signing_key: &[u8]) -> Result<User, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;

    let data = decode::<UserClaims>(token, &DecodingKey::from_secret(signing_key), &validation)
        .map_err(|e| {
            tracing::debug!(error = %e, "user token verification failed");
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            }
        })?;

    let id = data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthError::MalformedToken)?;

    Ok(User::from_id(id))
}
