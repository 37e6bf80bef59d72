//! Coin purchase documents.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::serialize_optional_oid_as_hex;

/// A completed coin purchase.
///
/// Immutable after insert; payment and amount fields arrive from the client
/// and are stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    /// Buying user.
    pub email: String,

    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_keeps_payment_fields_verbatim() {
        let purchase: Purchase = serde_json::from_str(
            r#"{"email":"b@x.com","coin":150,"price":10,"transactionId":"pi_123"}"#,
        )
        .unwrap();
        assert_eq!(purchase.email, "b@x.com");
        assert_eq!(purchase.extra.get_i64("coin").unwrap(), 150);
        assert_eq!(purchase.extra.get_str("transactionId").unwrap(), "pi_123");
    }
}
