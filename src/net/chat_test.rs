use super::*;

#[test]
fn parse_chat_response_reads_reply() {
    let resp = parse_chat_response(r#"{"reply":"Halo!"}"#).unwrap();
    assert_eq!(resp.reply.as_deref(), Some("Halo!"));
}

#[test]
fn parse_chat_response_rejects_html_error_page() {
    let err = parse_chat_response("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ChatError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_backend_is_unavailable_without_browser() {
    let backend = HttpChatBackend::new("/api/route");
    assert_eq!(backend.send_message("hello").await, Err(ChatError::Unavailable));
}
