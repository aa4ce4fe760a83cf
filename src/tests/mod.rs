mod catalog_test;

/// Sets up the logger for test runs. Safe to call from every test; only the
/// first call installs it.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
