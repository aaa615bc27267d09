//! Rendering of command reports and one-line status messages.

use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, Color as TableColor, Table, presets};
use serde::Serialize;

pub const BULLET: &str = "•";

/// How reports are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// One summary line
    Compact,
}

/// Kind of a status line; picks its icon and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
    Trace,
}

impl Tone {
    pub fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✓",
            Tone::Warning => "⚠",
            Tone::Error => "✗",
            Tone::Info => "ℹ",
            Tone::Trace => "→",
        }
    }

    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
            Tone::Info => Color::Blue,
            Tone::Trace => Color::BrightBlack,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// A command result that can be shown in every [`OutputFormat`].
pub trait Render: Serialize {
    fn table(&self, options: &OutputOptions) -> Table;
    fn summary(&self) -> String;
}

pub struct OutputManager {
    options: OutputOptions,
}

impl OutputManager {
    pub fn new(options: OutputOptions) -> Self {
        Self { options }
    }

    pub fn display<R: Render>(&self, report: &R) -> Result<()> {
        if self.options.quiet {
            return Ok(());
        }
        let text = match self.options.format {
            OutputFormat::Table => report.table(&self.options).to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
            OutputFormat::Compact => report.summary(),
        };
        println!("{text}");
        Ok(())
    }

    /// Status lines go to stdout unless they would corrupt JSON output or `--quiet` is set.
    fn status(&self, tone: Tone, message: &str) {
        if !self.options.quiet && self.options.format != OutputFormat::Json {
            println!("{}", self.decorate(tone, message));
        }
    }

    pub fn success(&self, message: &str) {
        self.status(Tone::Success, message);
    }

    pub fn warning(&self, message: &str) {
        self.status(Tone::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.status(Tone::Info, message);
    }

    /// Always printed, on stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.decorate(Tone::Error, message));
    }

    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.decorate(Tone::Trace, message));
        }
    }

    pub fn heading(&self, text: &str) {
        if self.options.quiet || self.options.format != OutputFormat::Table {
            return;
        }
        if self.options.no_color {
            println!("\n{text}\n{}", "-".repeat(text.chars().count()));
        } else {
            println!("\n{}", text.bright_blue().bold());
        }
    }

    fn decorate(&self, tone: Tone, message: &str) -> String {
        let line = format!("{} {message}", tone.icon());
        if self.options.no_color { line } else { line.color(tone.color()).to_string() }
    }
}

pub fn new_table(options: &OutputOptions) -> Table {
    let mut table = Table::new();
    if !options.no_color {
        table.load_preset(presets::UTF8_FULL_CONDENSED);
    }
    table
}

pub fn header(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn tinted(text: impl ToString, color: TableColor, options: &OutputOptions) -> Cell {
    let cell = Cell::new(text.to_string());
    if options.no_color { cell } else { cell.fg(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        key: &'static str,
        value: u32,
    }

    impl Render for Pair {
        fn table(&self, options: &OutputOptions) -> Table {
            let mut table = new_table(options);
            table.add_row(vec![header(self.key), Cell::new(self.value)]);
            table
        }

        fn summary(&self) -> String {
            format!("{}={}", self.key, self.value)
        }
    }

    fn plain(format: OutputFormat) -> OutputManager {
        OutputManager::new(OutputOptions {
            format,
            no_color: true,
            ..Default::default()
        })
    }

    #[test]
    fn displays_in_every_format() {
        let pair = Pair { key: "generated", value: 3 };
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Compact] {
            assert!(plain(format).display(&pair).is_ok());
        }
    }

    #[test]
    fn plain_status_lines_carry_the_icon() {
        let output = plain(OutputFormat::Table);
        assert_eq!(output.decorate(Tone::Warning, "careful"), "⚠ careful");
        assert_eq!(output.decorate(Tone::Error, "2 error(s) reported"), "✗ 2 error(s) reported");
    }

    #[test]
    fn colored_status_lines_keep_the_text() {
        colored::control::set_override(true);
        let output = OutputManager::new(OutputOptions::default());
        let line = output.decorate(Tone::Success, "done");
        colored::control::unset_override();
        assert!(line.contains("✓ done"));
        assert_ne!(line, "✓ done");
    }
}
