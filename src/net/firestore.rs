//! Firestore REST v1 wire format.
//!
//! DESIGN
//! ======
//! Only the pieces the comment board touches are modelled: typed field
//! values, documents, the paged list response, and a single-write commit with
//! a server timestamp transform. URL and body builders are pure so they can be
//! tested without a network.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::state::comments::{CommentRecord, NewComment};

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

/// Documents requested per list page.
pub const PAGE_SIZE: u32 = 300;

pub const FIELD_NAME: &str = "name";
pub const FIELD_COMMENT: &str = "comment";
pub const FIELD_RATING: &str = "rating";
pub const FIELD_TIMESTAMP: &str = "timestamp";

// =============================================================================
// VALUES
// =============================================================================

/// A typed Firestore field value, encoded as a single-key object
/// (`{"stringValue": "Ann"}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// int64, sent as a decimal string.
    #[serde(with = "int64")]
    IntegerValue(i64),
    DoubleValue(f64),
    /// RFC 3339 timestamp.
    TimestampValue(String),
    StringValue(String),
    /// Base64 bytes.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(serde_json::Value),
    MapValue(serde_json::Value),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of a numeric value. Doubles are rounded.
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::IntegerValue(n) => Some(*n),
            Self::DoubleValue(d) if d.is_finite() => Some(d.round() as i64),
            _ => None,
        }
    }
}

mod int64 {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(text) => text.parse().map_err(D::Error::custom),
        }
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A stored document as returned by `GET …/documents/{collection}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// One page of a collection listing. An empty collection is `{}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ListDocumentsResponse {
    /// Token for the following page, if any.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

// =============================================================================
// COMMIT
// =============================================================================

/// Body of `POST …/documents:commit`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    pub update: DocumentUpdate,
    pub current_document: Precondition,
    pub update_transforms: Vec<FieldTransform>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentUpdate {
    pub name: String,
    pub fields: BTreeMap<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Precondition {
    pub exists: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: String,
    pub set_to_server_value: ServerValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerValue {
    RequestTime,
}

// =============================================================================
// PATHS
// =============================================================================

fn database_path(cfg: &StoreConfig) -> String {
    format!("projects/{}/databases/{}", cfg.project_id, cfg.database)
}

/// `GET` target for listing the comment collection.
pub fn collection_url(cfg: &StoreConfig) -> String {
    format!("{}/{}/documents/{}", cfg.base_url, database_path(cfg), cfg.collection)
}

/// `POST` target for committing writes.
pub fn commit_url(cfg: &StoreConfig) -> String {
    format!("{}/{}/documents:commit", cfg.base_url, database_path(cfg))
}

/// Full resource name of document `doc_id` in the comment collection.
pub fn document_name(cfg: &StoreConfig, doc_id: &str) -> String {
    format!("{}/documents/{}/{doc_id}", database_path(cfg), cfg.collection)
}

/// Query parameters for one list page.
pub fn list_query(cfg: &StoreConfig, page_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("pageSize", PAGE_SIZE.to_string())];
    if let Some(token) = page_token {
        query.push(("pageToken", token.to_owned()));
    }
    query.extend(key_query(cfg));
    query
}

/// `key` parameter when an API key is configured.
pub fn key_query(cfg: &StoreConfig) -> Option<(&'static str, String)> {
    cfg.api_key.clone().map(|key| ("key", key))
}

// =============================================================================
// CODEC
// =============================================================================

/// Field map for a new comment. The timestamp is left to the server.
pub fn encode_comment(new: &NewComment) -> BTreeMap<String, Value> {
    BTreeMap::from([
        (FIELD_NAME.to_owned(), Value::StringValue(new.name.clone())),
        (FIELD_COMMENT.to_owned(), Value::StringValue(new.comment.clone())),
        (FIELD_RATING.to_owned(), Value::IntegerValue(i64::from(new.rating.get()))),
    ])
}

/// Commit creating document `doc_id` with a server-assigned `timestamp`.
pub fn commit_request(cfg: &StoreConfig, doc_id: &str, new: &NewComment) -> CommitRequest {
    CommitRequest {
        writes: vec![Write {
            update: DocumentUpdate { name: document_name(cfg, doc_id), fields: encode_comment(new) },
            current_document: Precondition { exists: false },
            update_transforms: vec![FieldTransform {
                field_path: FIELD_TIMESTAMP.to_owned(),
                set_to_server_value: ServerValue::RequestTime,
            }],
        }],
    }
}

/// Decode a stored comment. Documents without a numeric rating yield `None`.
pub fn decode_comment(doc: &Document) -> Option<CommentRecord> {
    let text = |field: &str| {
        doc.fields
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };
    let rating = doc.fields.get(FIELD_RATING).and_then(Value::as_i64)?;
    let timestamp = match doc.fields.get(FIELD_TIMESTAMP) {
        Some(Value::TimestampValue(ts)) => Some(ts.clone()),
        _ => doc.create_time.clone(),
    };

    Some(CommentRecord { name: text(FIELD_NAME), comment: text(FIELD_COMMENT), rating, timestamp })
}

/// Decode every usable document of a list page, logging the rest.
pub fn decode_page(page: &ListDocumentsResponse) -> Vec<CommentRecord> {
    page.documents
        .iter()
        .filter_map(|doc| {
            let record = decode_comment(doc);
            if record.is_none() {
                leptos::logging::warn!("skipping comment without rating: {}", doc.name);
            }
            record
        })
        .collect()
}
