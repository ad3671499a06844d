//! How record ids are shaped in lookup results

use crate::domain::PostRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Id shape for records returned by a lookup.
///
/// Listings always use string ids. Lookups either hand the record back with
/// its on-disk id type (`compat`) or normalize it like the listings (`string`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdFormat {
    /// Keep the id exactly as stored (number stays number)
    #[default]
    Compat,
    /// Rewrite the id to its string form
    String,
}

impl IdFormat {
    /// Apply this format to a record found by lookup
    pub fn apply(self, record: PostRecord) -> PostRecord {
        match self {
            IdFormat::Compat => record,
            IdFormat::String => record.with_string_id(),
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdFormat::Compat => f.write_str("compat"),
            IdFormat::String => f.write_str("string"),
        }
    }
}

impl FromStr for IdFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compat" => Ok(IdFormat::Compat),
            "string" => Ok(IdFormat::String),
            _ => Err(format!(
                "Invalid id format: '{}'. Valid id formats are: compat, string",
                s
            )),
        }
    }
}
