//! Serde helpers shared by the document models.

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an optional ObjectId as its 24-char hex form.
///
/// Documents leave the API as plain JSON; the driver's native ObjectId
/// serialization would expose `{"$oid": ...}` wrappers to clients. Inserts
/// are unaffected because new documents carry no id.
pub fn serialize_optional_oid_as_hex<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
