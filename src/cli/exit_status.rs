use std::process::ExitCode;

use crate::core::CommandOutcome;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed
/// - `Failure` (1): Command was cancelled, found nothing to work on, or met a malformed file
/// - `Error` (2): Command failed due to internal error (IO error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&CommandOutcome> for ExitStatus {
    fn from(outcome: &CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Completed { .. } => ExitStatus::Success,
            CommandOutcome::Cancelled | CommandOutcome::NothingFound | CommandOutcome::Failed(_) => {
                ExitStatus::Failure
            }
        }
    }
}
