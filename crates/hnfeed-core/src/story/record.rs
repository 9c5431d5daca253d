//! Validated story record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::InvalidInputError;

/// A story returned by the search endpoint.
///
/// Records are validated on ingest:
/// - `created_at` must be present and RFC 3339
/// - `title` and `author` read as `""` when missing or `null`
/// - `url` is `None` when missing, `null` or empty
/// - `_tags` defaults to an empty list
///
/// The typed fields are what the listing filters and renders. The record
/// itself is kept as received and is what gets serialized, so a story dumps
/// back to exactly the JSON the endpoint sent.
///
/// # Example
///
/// ```
/// use hnfeed_core::Story;
/// use serde_json::json;
///
/// let hit = json!({
///     "title": "Ask HN: anything",
///     "author": "pg",
///     "url": null,
///     "created_at": "2024-03-05T10:00:00Z",
///     "objectID": "1"
/// });
/// let story: Story = serde_json::from_value(hit.clone()).unwrap();
///
/// assert_eq!(story.author, "pg");
/// assert_eq!(story.url, None);
/// assert_eq!(story.object_id(), Some("1"));
/// assert_eq!(serde_json::to_value(&story).unwrap(), hit);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Story {
    /// Story title.
    pub title: String,

    /// Submitting user.
    pub author: String,

    /// Link target, absent for text posts.
    pub url: Option<String>,

    /// Submission time.
    pub created_at: DateTime<Utc>,

    /// Endpoint tags, in the order given.
    pub tags: Vec<String>,

    record: Map<String, Value>,
}

impl Story {
    /// Create a story with no url or tags.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        let author = author.into();

        let mut record = Map::new();
        record.insert("title".to_string(), Value::from(title.as_str()));
        record.insert("author".to_string(), Value::from(author.as_str()));
        record.insert(
            "created_at".to_string(),
            Value::from(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert("_tags".to_string(), Value::Array(Vec::new()));

        Self {
            title,
            author,
            url: None,
            created_at,
            tags: Vec::new(),
            record,
        }
    }

    /// Set the link target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into()).filter(|u: &String| !u.is_empty());
        match &self.url {
            Some(url) => self.record.insert("url".to_string(), Value::from(url.as_str())),
            None => self.record.remove("url"),
        };
        self
    }

    /// Set the tag list.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.record.insert(
            "_tags".to_string(),
            self.tags.iter().map(|t| Value::from(t.as_str())).collect(),
        );
        self
    }

    /// The endpoint's identifier for this story, if it sent one.
    pub fn object_id(&self) -> Option<&str> {
        self.record.get("objectID").and_then(Value::as_str)
    }

    /// The record as received.
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

/// Typed view of a record, read before validation.
#[derive(Deserialize)]
struct Fields {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    author: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, rename = "_tags", deserialize_with = "null_as_default")]
    tags: Vec<String>,
}

impl TryFrom<Map<String, Value>> for Story {
    type Error = InvalidInputError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields = Fields::deserialize(&Value::Object(record.clone())).map_err(|e| {
            InvalidInputError::Story {
                reason: e.to_string(),
            }
        })?;

        let created_at = fields.created_at.ok_or_else(|| InvalidInputError::Story {
            reason: "missing created_at".to_string(),
        })?;

        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| InvalidInputError::Story {
                reason: format!("invalid created_at '{}': {}", created_at, e),
            })?
            .with_timezone(&Utc);

        Ok(Self {
            title: fields.title,
            author: fields.author,
            url: fields.url.filter(|u| !u.is_empty()),
            created_at,
            tags: fields.tags,
            record,
        })
    }
}

impl Serialize for Story {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.record.serialize(serializer)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
