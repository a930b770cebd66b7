use std::process::ExitCode;

/// Exit status for CLI runs.
///
/// - `Success` (0): every source file was read and the report was written
/// - `Failure` (1): report written, but some source files could not be read
/// - `Error` (2): run aborted (missing directory, bad config, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every source file was read and the report was written.
    Success,
    /// Report written, but some source files could not be read.
    Failure,
    /// Run aborted before a report could be written.
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
