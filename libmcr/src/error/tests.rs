use super::*;
use std::error::Error;

#[test]
fn test_canceled_display() {
    let err = McrError::Canceled;
    assert_eq!(err.to_string(), "context canceled");
    assert!(err.is_cancellation());
}

#[test]
fn test_deadline_exceeded_display() {
    let err = McrError::DeadlineExceeded;
    assert_eq!(err.to_string(), "context deadline exceeded");
    assert!(err.is_cancellation());
}

#[test]
fn test_transport_error_is_not_cancellation() {
    let err = McrError::transport("connection refused");
    assert!(!err.is_cancellation());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_transport_error_keeps_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = McrError::transport_with_source("failed to connect", io_err);

    let source = err.source().expect("source should be set");
    assert!(source.to_string().contains("refused"));
}

#[test]
fn test_upstream_not_found_carries_status_text() {
    let err = McrError::upstream(StatusCode::NOT_FOUND);

    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("404 Not Found"));
}

#[test]
fn test_upstream_server_error_is_same_kind() {
    // All non-200 statuses share one variant.
    let not_found = McrError::upstream(StatusCode::NOT_FOUND);
    let unavailable = McrError::upstream(StatusCode::SERVICE_UNAVAILABLE);
    let unauthorized = McrError::upstream(StatusCode::UNAUTHORIZED);

    assert!(matches!(not_found, McrError::Upstream { .. }));
    assert!(matches!(unavailable, McrError::Upstream { .. }));
    assert!(matches!(unauthorized, McrError::Upstream { .. }));
    assert!(unavailable.to_string().contains("503 Service Unavailable"));
}

#[test]
fn test_status_code_absent_for_other_kinds() {
    assert_eq!(McrError::Canceled.status_code(), None);
    assert_eq!(McrError::invalid_request("bad").status_code(), None);
}

#[test]
fn test_decode_error_keeps_source() {
    let json_err = serde_json::from_str::<Vec<String>>("\"not-an-array\"").unwrap_err();
    let err = McrError::decode_with_source("Failed to parse catalog response", json_err);

    assert!(matches!(err, McrError::Decode { .. }));
    assert!(err.to_string().contains("catalog"));
    assert!(err.source().is_some());
}

#[test]
fn test_invalid_request_without_source() {
    let err = McrError::invalid_request("endpoint cannot be empty");
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "Invalid request: endpoint cannot be empty");
}

#[test]
fn test_config_error_records_path() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = McrError::config_with_source("failed to read", Some("/tmp/mcr.yaml"), io_err);

    match err {
        McrError::Config { path, .. } => assert_eq!(path.as_deref(), Some("/tmp/mcr.yaml")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<McrError>();
}

#[test]
fn test_upstream_keeps_server_reason_phrase() {
    let err = McrError::upstream_with_reason(StatusCode::SERVICE_UNAVAILABLE, Some("Slow Down"));

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.to_string(), "Upstream error: 503 Slow Down");
}

#[test]
fn test_upstream_empty_reason_falls_back_to_canonical() {
    let err = McrError::upstream_with_reason(StatusCode::NOT_FOUND, Some(""));
    assert_eq!(err.to_string(), "Upstream error: 404 Not Found");
}

#[test]
fn test_upstream_unknown_code_without_reason() {
    let status = StatusCode::from_u16(599).unwrap();
    let err = McrError::upstream(status);

    match err {
        McrError::Upstream { status_code, status } => {
            assert_eq!(status_code, 599);
            assert_eq!(status, "599");
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}
