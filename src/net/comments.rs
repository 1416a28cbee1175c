//! Comment store backed by the Firestore REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`StoreError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`StoreError`]; the board decides what the
//! user sees. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::types::StoreError;
use crate::config::StoreConfig;
use crate::state::comments::{CommentRecord, NewComment};

/// A remote collection of comment records.
#[allow(async_fn_in_trait)]
pub trait CommentStore {
    /// Fetch every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    async fn list_comments(&self) -> Result<Vec<CommentRecord>, StoreError>;

    /// Append one record. The store assigns its timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected or never completes.
    async fn add_comment(&self, comment: &NewComment) -> Result<(), StoreError>;
}

/// [`CommentStore`] for one Firestore collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirestoreStore {
    config: StoreConfig,
}

impl FirestoreStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn configured(&self) -> Result<&StoreConfig, StoreError> {
        if self.config.is_configured() { Ok(&self.config) } else { Err(StoreError::NotConfigured) }
    }
}

impl CommentStore for FirestoreStore {
    async fn list_comments(&self) -> Result<Vec<CommentRecord>, StoreError> {
        let cfg = self.configured()?;
        #[cfg(feature = "hydrate")]
        {
            use super::firestore::{ListDocumentsResponse, collection_url, decode_page, list_query};

            let url = collection_url(cfg);
            let mut records = Vec::new();
            let mut page_token: Option<String> = None;
            loop {
                log::debug!("comments: GET {url} page_token={page_token:?}");
                let resp = gloo_net::http::Request::get(&url)
                    .query(list_query(cfg, page_token.as_deref()))
                    .send()
                    .await
                    .map_err(|e| StoreError::Transport(e.to_string()))?;
                let text = read_body(&resp).await?;
                let page: ListDocumentsResponse =
                    serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
                records.extend(decode_page(&page));
                match page.next_page() {
                    Some(token) => page_token = Some(token.to_owned()),
                    None => break,
                }
            }
            Ok(records)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cfg;
            Err(StoreError::Unavailable)
        }
    }

    async fn add_comment(&self, comment: &NewComment) -> Result<(), StoreError> {
        let cfg = self.configured()?;
        #[cfg(feature = "hydrate")]
        {
            use super::firestore::{commit_request, commit_url, key_query};

            let doc_id = new_document_id();
            let body = commit_request(cfg, &doc_id, comment);
            let url = commit_url(cfg);
            log::debug!("comments: POST {url} document={doc_id}");
            let resp = gloo_net::http::Request::post(&url)
                .query(key_query(cfg))
                .json(&body)
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            read_body(&resp).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cfg, comment);
            Err(StoreError::Unavailable)
        }
    }
}

/// Read a response body, turning non-2xx statuses into errors.
#[cfg(feature = "hydrate")]
async fn read_body(resp: &gloo_net::http::Response) -> Result<String, StoreError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;
    if resp.ok() { Ok(text) } else { Err(StoreError::Status { status, body: text }) }
}

/// Client-chosen document id (32 hex chars).
#[cfg(any(test, feature = "hydrate"))]
fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
