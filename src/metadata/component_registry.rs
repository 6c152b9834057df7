use super::ComponentMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate registry document mapping lower-cased `{category}/{name}` keys to
/// component metadata.
///
/// Keys are unique and ordering carries no meaning for consumers; the sorted
/// map just keeps repeated runs byte-identical apart from `lastUpdated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRegistry {
    pub components: BTreeMap<String, ComponentMetadata>,

    /// Version string sourced from the build environment.
    pub version: String,

    /// Generation timestamp, RFC 3339 in JSON.
    pub last_updated: DateTime<Utc>,
}
