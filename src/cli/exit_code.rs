use super::{exit_status::ExitStatus, run::RunResult};

pub fn exit_status_from_result(result: &RunResult) -> ExitStatus {
    if result.failures.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
