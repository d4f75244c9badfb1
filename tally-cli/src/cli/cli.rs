use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

use super::style::Style;

/// tally — Add up durations like `1:45 hr, 30 min, 2h`
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("solo").args(["path"]).conflicts_with_all(["text", "file"])),
)]
pub struct Cli {
    /// Prints the config file locations tally looks at
    #[arg(long, short)]
    pub path: bool,
    /// Use this config file instead of the standard locations.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Read durations from a file (one per line or comma separated). Use `-` for stdin.
    #[arg(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Output style: "long", "short" or "json". Short style only prints the total.
    #[arg(long, short, value_enum, env = "TALLY_STYLE", default_value_t = Style::Long)]
    pub style: Style,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log filter used when RUST_LOG is not set (e.g. `debug`, `tally_core=trace`).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Durations to add up (e.g., `tally 1:45 hr, 30 min, 2h`).
    /// Without text or `--file`, tally reads stdin or opens your $EDITOR.
    #[arg()]
    pub text: Vec<String>,
}
