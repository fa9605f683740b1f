//! Authentication for the Signet API
//!
//! Provides signed user tokens (generation + verification), request-scoped
//! identity storage, and axum extractors that work with any state
//! implementing `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod token;
mod types;

pub use claims::UserClaims;
pub use config::AuthConfig;
pub use context::{current_user, set_user, CurrentUser};
pub use error::AuthError;
pub use extractors::{AuthUser, BearerToken};
pub use token::{generate_user_token, parse_user_from_token};
pub use types::User;
