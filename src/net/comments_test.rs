use super::*;
use crate::state::comments::Rating;

fn new_comment() -> NewComment {
    NewComment { name: "Ann".to_owned(), comment: "Great".to_owned(), rating: Rating::new(5).unwrap() }
}

#[test]
fn new_document_id_is_unique_hex() {
    let a = new_document_id();
    let b = new_document_id();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[tokio::test]
async fn unconfigured_store_fails_before_any_request() {
    let store = FirestoreStore::new(StoreConfig::unconfigured());
    assert_eq!(store.list_comments().await, Err(StoreError::NotConfigured));
    assert_eq!(store.add_comment(&new_comment()).await, Err(StoreError::NotConfigured));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn configured_store_is_unavailable_without_browser() {
    let config = StoreConfig { project_id: "demo-site".to_owned(), ..StoreConfig::unconfigured() };
    let store = FirestoreStore::new(config);
    assert_eq!(store.list_comments().await, Err(StoreError::Unavailable));
}
