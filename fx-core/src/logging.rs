#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::constants::*;

pub fn setup_for_cli(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Human-readable progress and outcome messages, as opposed to the diagnostic output that goes
/// through `tracing`.  Each message is rendered on its own line with a leading status marker.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait Reporter {
    fn action(&self, msg: &str);
    fn success(&self, msg: &str);
    fn failure(&self, msg: &str);
}

pub fn format_line(marker: &str, msg: &str) -> String {
    format!("{marker} {msg}")
}

pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn action(&self, msg: &str) {
        println!("{}", format_line(ACTION_MARKER, msg));
    }

    fn success(&self, msg: &str) {
        println!("{}", format_line(SUCCESS_MARKER, msg));
    }

    fn failure(&self, msg: &str) {
        eprintln!("{}", format_line(FAILURE_MARKER, msg));
    }
}
