//! Data models for provider API payloads.
//!
//! - `Instance`: a compute instance (VPS) owned by the account
//! - `Snapshot`: a point-in-time image of one instance
//! - `TokenResponse`: the password-grant answer from the auth endpoint
//! - `ListResponse`: the `{ "data": [...] }` envelope every listing uses

pub mod instance;
pub mod snapshot;
pub mod token;

pub use instance::Instance;
pub use snapshot::{NewSnapshot, Snapshot};
pub use token::TokenResponse;

use serde::{Deserialize, Deserializer};

/// Envelope wrapping every collection the compute API returns.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Accept an identifier encoded either as a JSON number or a JSON string.
///
/// Instance ids come back as integers while snapshot ids are strings; both
/// are only ever echoed into URL paths, so they are kept as `String`.
pub(crate) fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(deserializer)?.into_string())
}

/// Like `id_from_number_or_string`, with JSON `null` mapping to `None`.
pub(crate) fn optional_id_from_number_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_string))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}
