//! User documents and the role enumeration.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::serialize_optional_oid_as_hex;

/// Marketplace role of a user account.
///
/// The wire form is the lowercase string (`worker`, `buyer`, `admin`);
/// anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Completes tasks and earns coins.
    Worker,
    /// Posts tasks and pays coins.
    Buyer,
    /// Full access, bypasses owner checks.
    Admin,
}

impl Role {
    /// Returns the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Buyer => "buyer",
            Self::Admin => "admin",
        }
    }

    /// Parse from the wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "worker" => Some(Self::Worker),
            "buyer" => Some(Self::Buyer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// A user account document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    /// Identifying email. Unique in practice, not enforced by the store.
    pub email: String,

    pub role: Role,

    /// Coin balance. Mutated only through the coin-update endpoint.
    #[serde(default)]
    pub coin: i64,

    /// Remaining registration fields (display name, photo URL, ...) are
    /// persisted verbatim.
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_wire_strings() {
        assert_eq!(Role::parse("worker"), Some(Role::Worker));
        assert_eq!(Role::parse("buyer"), Some(Role::Buyer));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("Worker"), None);
    }

    #[test]
    fn user_deserializes_registration_payload() {
        let user: User = serde_json::from_str(
            r#"{"email":"a@x.com","role":"worker","coin":10,"name":"Alba"}"#,
        )
        .unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, Role::Worker);
        assert_eq!(user.coin, 10);
        assert!(user.id.is_none());
        assert_eq!(user.extra.get_str("name").unwrap(), "Alba");
    }

    #[test]
    fn user_rejects_unknown_role() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"email":"a@x.com","role":"root","coin":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_coin_defaults_to_zero() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@x.com","role":"buyer"}"#).unwrap();
        assert_eq!(user.coin, 0);
    }
}
