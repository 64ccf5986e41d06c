// Unit tests for grid layout, date math and options
// Parameterised with test-case

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod date_tests;
mod layout_tests;
mod settings_tests;

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
