//! Command execution logging helpers

use std::time::Duration;

use heypage_domain::HeyPageError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"links::create_link"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the field set
/// consistent. Callers must avoid forwarding sensitive values in
/// `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `HeyPageError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &HeyPageError) -> &'static str {
    match error {
        HeyPageError::Validation(_) => "validation",
        HeyPageError::NotFound(_) => "not_found",
        HeyPageError::Integrity(_) => "integrity",
        HeyPageError::Store(_) => "store",
        HeyPageError::Config(_) => "config",
        HeyPageError::Internal(_) => "internal",
    }
}

/// Install a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Intended to be called once by the hosting shell; repeated calls are
/// harmless no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
