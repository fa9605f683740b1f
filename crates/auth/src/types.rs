//! Identity types carried through tokens and request state

use serde::Serialize;

/// Lightweight identity for authenticated users.
///
/// Only `id` survives a token round trip. Profile fields are populated by
/// whoever loaded the full record and come back as `None` when an identity
/// is reconstructed from a parsed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Identity known only by its id, e.g. reconstructed from a token subject.
    pub fn from_id(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
        }
    }
}
