mod content;
mod index;

use simplelog::{CombinedLogger, TermLogger, TerminalMode};

#[test]
fn test_log_goes_to_stderr() {
    assert!(matches!(crate::LOG_TERMINAL_MODE, TerminalMode::Stderr));
}

fn setup_log() {
    // Only the first test to get here installs the logger
    let _ = CombinedLogger::init(vec![TermLogger::new(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        crate::LOG_TERMINAL_MODE,
        simplelog::ColorChoice::Auto,
    )]);
}
