mod cli_mode;
mod editor_utils;
mod tally_cli;

pub use cli_mode::CliModeResult;
pub use tally_cli::TallyCli;
