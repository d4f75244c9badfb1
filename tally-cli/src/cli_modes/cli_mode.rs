use std::process::ExitCode;

/// What a mode did with the invocation.
pub enum CliModeResult {
    /// The mode handled the invocation; exit with this code.
    Finish(ExitCode),
    /// The mode did not apply; try the next one.
    NothingToDo,
}
