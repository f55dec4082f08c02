//! Error handling and exit codes.

use fibseq_core::constants::exit_codes;
use fibseq_core::FibError;

/// Map a top-level error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}
