//! Axum extractors for authentication
//!
//! `AuthUser` is generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};

use crate::config::AuthConfig;
use crate::context::{current_user, set_user, CurrentUser};
use crate::error::AuthError;
use crate::token::parse_user_from_token;
use crate::types::User;

/// Extract the credential from an Authorization header value.
///
/// Accepts both `Bearer <token>` and a bare token value; older clients
/// send the token without a scheme prefix.
pub(crate) fn bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::MissingCredential)?;

    let token = header_str.strip_prefix("Bearer ").unwrap_or(header_str);

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token.to_string())
}

/// Raw credential extractor: the Authorization token, unverified
#[derive(Debug)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;

        Ok(BearerToken(bearer_token(header)?))
    }
}

/// Authenticated user extractor.
///
/// Verifies the presented token with the configured signing key and
/// attaches the identity to the request so later `CurrentUser` extractions
/// in the same handler chain can read it.
#[derive(Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let user = parse_user_from_token(&token, config.signing_key.as_bytes())?;

        set_user(&mut parts.extensions, user.clone());

        Ok(AuthUser(user))
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        current_user(&parts.extensions).map(CurrentUser)
    }
}
