use phub_logger::{Logger, LoggerError};

#[test]
fn console_logger_writes_no_files_and_owns_the_global_slot() {
    let logger = Logger::builder()
        .name("phub-console")
        .verbosity(2)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files());
    tracing::trace!("visible at -vv");

    let err = Logger::builder().name("phub-console-again").init().expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert!(err.to_string().contains("Logger 'phub-console-again'"));
}
