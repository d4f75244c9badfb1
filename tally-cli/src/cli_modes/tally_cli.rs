use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{
    cli::Cli,
    render::{RenderOptions, Renderer},
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::Path,
    process::ExitCode,
};
use tally_core::{Config, Tally};

pub struct TallyCli {
    cli: Cli,
    renderer: Renderer,
    tally: Tally,
}

impl TallyCli {
    pub fn new(cli: Cli, tally: Tally) -> Self {
        let renderer = Renderer::new(RenderOptions {
            use_color: cli.color.use_color(),
            style: cli.style,
        });
        TallyCli {
            cli,
            renderer,
            tally,
        }
    }

    pub fn run(&self) -> Result<ExitCode> {
        if let CliModeResult::Finish(code) = self.path_mode() {
            return Ok(code);
        }

        if let CliModeResult::Finish(code) = self.text_mode()? {
            return Ok(code);
        }

        if let CliModeResult::Finish(code) = self.file_mode()? {
            return Ok(code);
        }

        if let CliModeResult::Finish(code) = self.stdin_mode()? {
            return Ok(code);
        }

        if let CliModeResult::Finish(code) = self.editor_mode()? {
            return Ok(code);
        }

        Ok(ExitCode::SUCCESS)
    }

    fn path_mode(&self) -> CliModeResult {
        if !self.cli.path {
            return CliModeResult::NothingToDo;
        }
        let paths = match &self.cli.config {
            Some(path) => vec![path.clone()],
            None => Config::config_file_paths(),
        };
        for path in paths {
            self.renderer.print_info(&format!("{}", path.display()));
        }
        CliModeResult::Finish(ExitCode::SUCCESS)
    }

    fn text_mode(&self) -> Result<CliModeResult> {
        if self.cli.text.is_empty() {
            return Ok(CliModeResult::NothingToDo);
        }
        tracing::debug!("reading durations from arguments");
        let inline = self.cli.text.join(" ");
        self.report(&inline)
    }

    fn file_mode(&self) -> Result<CliModeResult> {
        let Some(file) = &self.cli.file else {
            return Ok(CliModeResult::NothingToDo);
        };
        let input = if file == Path::new("-") {
            tracing::debug!("reading durations from stdin");
            read_stdin()?
        } else {
            tracing::debug!("reading durations from {}", file.display());
            fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?
        };
        self.report(&input)
    }

    fn stdin_mode(&self) -> Result<CliModeResult> {
        if io::stdin().is_terminal() {
            return Ok(CliModeResult::NothingToDo);
        }
        tracing::debug!("reading durations from piped stdin");
        let input = read_stdin()?;
        self.report(&input)
    }

    fn editor_mode(&self) -> Result<CliModeResult> {
        let editor = resolve_editor(&self.tally.config.editor);
        tracing::debug!("opening {editor} for input");
        let input = create_editor_buffer(&editor)?;
        if input.trim().is_empty() {
            self.renderer
                .print_info("No durations to add up, because no text was received.");
            return Ok(CliModeResult::Finish(ExitCode::SUCCESS));
        }
        self.report(&input)
    }

    /// Parses `input`, prints it and picks the exit code: failure when any entry is invalid.
    fn report(&self, input: &str) -> Result<CliModeResult> {
        let result = self.tally.parse(input);
        tracing::debug!(
            entries = result.entries.len(),
            invalid = result.invalid_entries().count(),
            total = result.total,
            "parsed input"
        );
        let progress = self.tally.target_progress(result.total);
        self.renderer.print_result(&result, progress)?;

        let code = if result.is_valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
        Ok(CliModeResult::Finish(code))
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}
