//! Request-scoped identity storage
//!
//! The authenticated identity lives in the request's `Extensions`, keyed by
//! the `CurrentUser` type rather than a string. Retrieval is type-safe by
//! construction, so an absent identity is the only failure mode.

use axum::http::Extensions;

use crate::error::AuthError;
use crate::types::User;

/// Identity attached to the current request after authentication
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Attach `user` to the request for downstream handlers. Pure write.
pub fn set_user(extensions: &mut Extensions, user: User) {
    extensions.insert(CurrentUser(user));
}

/// Read the identity attached earlier in the request's handler chain.
pub fn current_user(extensions: &Extensions) -> Result<User, AuthError> {
    extensions
        .get::<CurrentUser>()
        .map(|current| current.0.clone())
        .ok_or(AuthError::MissingCredential)
}
