use stickypad_core::{init_logging, logging_status};
use tempfile::tempdir;

// Logging state is process-global, so the whole lifecycle is exercised in
// one test.
#[test]
fn init_is_idempotent_and_rejects_reconfiguration() {
    let log_dir = tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempdir().unwrap();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("info", &log_dir_str).unwrap();

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_err.contains("refusing to switch"));

    let dir_err = init_logging("info", other_dir.path().to_str().unwrap()).unwrap_err();
    assert!(dir_err.contains("refusing to switch"));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir.path());
}
