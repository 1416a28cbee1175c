use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServiceConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "demo-site")])).unwrap();
    assert_eq!(cfg.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
    assert_eq!(cfg.store.base_url, DEFAULT_FIRESTORE_BASE_URL);
    assert_eq!(cfg.store.project_id, "demo-site");
    assert_eq!(cfg.store.database, DEFAULT_FIRESTORE_DATABASE);
    assert_eq!(cfg.store.collection, DEFAULT_FIRESTORE_COLLECTION);
    assert_eq!(cfg.store.api_key, None);
    assert!(cfg.store.is_configured());
}

#[test]
fn from_lookup_parses_overrides_and_trims_trailing_slashes() {
    let cfg = ServiceConfig::from_lookup(lookup(&[
        ("CHAT_ENDPOINT", "https://chat.example.test/api/route/"),
        ("FIRESTORE_BASE_URL", "http://localhost:8080/v1/"),
        ("FIRESTORE_PROJECT_ID", "demo-site"),
        ("FIRESTORE_DATABASE", "reviews"),
        ("FIRESTORE_COLLECTION", "guestbook"),
        ("FIRESTORE_API_KEY", "AIza-test"),
    ]))
    .unwrap();
    assert_eq!(cfg.chat_endpoint, "https://chat.example.test/api/route");
    assert_eq!(cfg.store.base_url, "http://localhost:8080/v1");
    assert_eq!(cfg.store.database, "reviews");
    assert_eq!(cfg.store.collection, "guestbook");
    assert_eq!(cfg.store.api_key.as_deref(), Some("AIza-test"));
}

#[test]
fn from_lookup_missing_project_errors() {
    let err = ServiceConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIRESTORE_PROJECT_ID" });
    assert!(err.to_string().contains("FIRESTORE_PROJECT_ID"));
}

#[test]
fn from_lookup_blank_values_count_as_absent() {
    let err = ServiceConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIRESTORE_PROJECT_ID" });

    let cfg = ServiceConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "p"), ("FIRESTORE_API_KEY", "")])).unwrap();
    assert_eq!(cfg.store.api_key, None);
}

#[test]
fn from_lookup_rejects_nested_collection_path() {
    let err =
        ServiceConfig::from_lookup(lookup(&[("FIRESTORE_PROJECT_ID", "p"), ("FIRESTORE_COLLECTION", "a/b/c")]))
            .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "FIRESTORE_COLLECTION", .. }));
}

#[test]
fn fallback_store_is_unconfigured() {
    let cfg = ServiceConfig::fallback();
    assert_eq!(cfg.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
    assert!(!cfg.store.is_configured());
}
