use super::theme::OneDark;
use crate::cli::Style;
use anyhow::Result;
use serde::Serialize;
use tally_core::{ParseResult, ParsedEntry, TargetProgress, format_total_time};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub style: Style,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

/// JSON shape printed by `--style json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ParseResult,
    formatted: String,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_result(&self, result: &ParseResult, progress: Option<TargetProgress>) -> Result<()> {
        match self.opts.style {
            Style::Long => {
                for entry in &result.entries {
                    self.print_entry_line(entry);
                }
                self.print_total(result.total);
                if let Some(progress) = progress {
                    self.print_progress(progress);
                }
            }
            Style::Short => println!("{}", format_total_time(result.total)),
            Style::Json => self.print_json(result)?,
        }
        Ok(())
    }

    pub fn print_entry_line(&self, entry: &ParsedEntry) {
        let mut original = entry.original.to_string();
        let mut value = if entry.valid {
            format_total_time(u64::from(entry.minutes))
        } else {
            "not a duration".to_string()
        };
        if self.opts.use_color {
            original = original.with(OneDark::YELLOW).to_string();
            value = if entry.valid {
                value.with(OneDark::CYAN).to_string()
            } else {
                value.with(OneDark::RED).to_string()
            };
        }
        let marker = if entry.valid { "→" } else { "✗" };
        println!("{original} {marker} {value}");
    }

    fn print_total(&self, total: u64) {
        let total = format_total_time(total);
        if self.opts.use_color {
            self.print_md(&format!("**Total:** {total}"));
        } else {
            println!("Total: {total}");
        }
    }

    fn print_progress(&self, progress: TargetProgress) {
        let line = match progress {
            TargetProgress::Remaining(minutes) => {
                format!("Remaining: {}", format_total_time(minutes))
            }
            TargetProgress::Reached => "Target reached".to_string(),
            TargetProgress::Over(minutes) => {
                format!("Over target by: {}", format_total_time(minutes))
            }
        };
        if self.opts.use_color {
            self.print_md(&format!("*{line}*"));
        } else {
            println!("{line}");
        }
    }

    fn print_json(&self, result: &ParseResult) -> Result<()> {
        let report = JsonReport {
            result,
            formatted: format_total_time(result.total),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
