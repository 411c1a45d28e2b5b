//! Error display tests

use nscache_domain::error::Error;

#[test]
fn test_not_found_message_names_key() {
    let err = Error::NotFound {
        key: "sys:app:key".to_string(),
    };
    assert_eq!(err.to_string(), "No result for: sys:app:key");
    assert!(err.is_not_found());
}

#[test]
fn test_empty_listing_message_names_pattern() {
    let err = Error::EmptyListing {
        pattern: "sys:app:*".to_string(),
    };
    assert_eq!(err.to_string(), "No keys to delete for: sys:app:*");
    assert!(!err.is_not_found());
}

#[test]
fn test_infrastructure_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::infrastructure("Redis GET failed", io);

    assert_eq!(err.to_string(), "Infrastructure error: Redis GET failed");
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn test_construction_error_display() {
    let err = Error::construction("missing system key prefix");
    assert_eq!(
        err.to_string(),
        "Construction error: missing system key prefix"
    );
}
