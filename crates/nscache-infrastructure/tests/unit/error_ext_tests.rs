//! Error context tests

use nscache_domain::error::Error;
use nscache_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing_io().context("Reading file").unwrap_err();
    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Reading file: gone");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::io::Result<u8> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = failing_io().with_context(|| "Lazy".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "Infrastructure error: Lazy: gone");
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let err = failing_io().config_context("Loading").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.to_string(), "Configuration error: Loading: gone");
}
