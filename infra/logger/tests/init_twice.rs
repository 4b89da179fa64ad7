use folio_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn web_app_logger_is_installed_once_per_page() {
    let logger = Logger::builder()
        .name("folio-web")
        .level(LevelFilter::DEBUG)
        .init()
        .expect("first init should succeed");
    assert_eq!(logger.name(), "folio-web");

    // A second `main` on the same page must not stack subscribers.
    let err = Logger::builder()
        .name("folio-web")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Tracing subscriber error: "), "{err}");
}
