//! Post records and the shapes derived from them

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Title and content used for the synthetic record returned on a lookup miss.
pub const NOT_FOUND: &str = "Not found";

/// Identifier of a post as stored on disk: a JSON number, string or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl PostId {
    /// String form used for route params and lookups.
    ///
    /// Integral floats print without a fractional part, so `1.0` on disk
    /// matches the route param `"1"`.
    pub fn to_key(&self) -> String {
        match self {
            PostId::Text(text) => text.clone(),
            PostId::Bool(flag) => flag.to_string(),
            PostId::Number(number) => {
                if number.is_f64() {
                    number.as_f64().map(format_float).unwrap_or_else(|| number.to_string())
                } else {
                    number.to_string()
                }
            }
        }
    }
}

/// Shortest round-trip form; exponent notation outside `[1e-6, 1e21)`
fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId::Text(value.to_string())
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        PostId::Number(value.into())
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One post entry as stored in the data file.
///
/// Field values are not checked: a numeric date or a `null` author is kept
/// as found. Missing fields stay missing, and keys this type does not know
/// about are kept in `extra` so the record can be handed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Value>,
    #[serde(
        rename = "contentHtml",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_html: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostRecord {
    /// Build a record with all text fields present.
    pub fn new(
        id: impl Into<PostId>,
        title: &str,
        date: &str,
        author: &str,
        content_html: &str,
    ) -> Self {
        PostRecord {
            id: id.into(),
            title: Some(title.into()),
            date: Some(date.into()),
            author: Some(author.into()),
            content_html: Some(content_html.into()),
            extra: Map::new(),
        }
    }

    /// The record returned by a lookup that matched nothing.
    pub fn placeholder(id: &str) -> Self {
        PostRecord::new(id, NOT_FOUND, "", "", NOT_FOUND)
    }

    /// Whether the stringified id equals `key` exactly.
    pub fn has_key(&self, key: &str) -> bool {
        self.id.to_key() == key
    }

    /// Title used for ordering. A missing or `null` title sorts as the
    /// empty string; any other non-string value is returned as the error.
    pub fn sort_title(&self) -> Result<&str, &Value> {
        match &self.title {
            None | Some(Value::Null) => Ok(""),
            Some(Value::String(title)) => Ok(title.as_str()),
            Some(other) => Err(other),
        }
    }

    /// Same record with its id rewritten to string form.
    pub fn with_string_id(mut self) -> Self {
        self.id = PostId::Text(self.id.to_key());
        self
    }
}

/// Listing shape of a post: string id plus the four display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Value>,
    #[serde(
        rename = "contentHtml",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_html: Option<Value>,
}

impl From<&PostRecord> for PostSummary {
    fn from(record: &PostRecord) -> Self {
        PostSummary {
            id: record.id.to_key(),
            title: record.title.clone(),
            date: record.date.clone(),
            author: record.author.clone(),
            content_html: record.content_html.clone(),
        }
    }
}

/// Static path entry: `{ "params": { "id": "..." } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParam {
    pub params: RouteParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub id: String,
}

impl RouteParam {
    pub fn new(id: impl Into<String>) -> Self {
        RouteParam {
            params: RouteParams { id: id.into() },
        }
    }
}

impl From<&PostRecord> for RouteParam {
    fn from(record: &PostRecord) -> Self {
        RouteParam::new(record.id.to_key())
    }
}
