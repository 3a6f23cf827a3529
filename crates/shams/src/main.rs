mod settings;
mod view;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use settings::{ColorMode, Overrides, Resolved, Settings, ViewMode};

/// Compare two texts line by line, with word-level highlights
#[derive(Debug, Parser)]
#[command(name = "shams", version)]
struct Cli {
    /// Original text file, or `-` for stdin
    original: PathBuf,

    /// Modified text file, or `-` for stdin
    modified: PathBuf,

    /// Layout of the output
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Ignore differences in whitespace
    #[arg(short = 'w', long, overrides_with = "no_ignore_whitespace")]
    ignore_whitespace: bool,

    /// Compare whitespace even if the settings file ignores it
    #[arg(long, overrides_with = "ignore_whitespace")]
    no_ignore_whitespace: bool,

    /// Ignore differences in case
    #[arg(short = 'i', long, overrides_with = "no_ignore_case")]
    ignore_case: bool,

    /// Compare case even if the settings file ignores it
    #[arg(long, overrides_with = "ignore_case")]
    no_ignore_case: bool,

    /// Show lines that moved instead of deleted and added
    #[arg(short = 'm', long, overrides_with = "no_detect_moved")]
    detect_moved: bool,

    /// Do not detect moved lines even if the settings file asks for it
    #[arg(long, overrides_with = "detect_moved")]
    no_detect_moved: bool,

    /// Print line counts after the diff
    #[arg(long)]
    stats: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Refuse inputs with more lines than this
    #[arg(long)]
    max_lines: Option<usize>,

    /// Give up when the comparison takes longer than this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Settings file (TOML)
    #[arg(long, env = "SHAMS_CONFIG")]
    config: Option<PathBuf>,
}

/// A switch given as `--flag` or `--no-flag`, if either was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            ignore_whitespace: switch(self.ignore_whitespace, self.no_ignore_whitespace),
            ignore_case: switch(self.ignore_case, self.no_ignore_case),
            detect_moved: switch(self.detect_moved, self.no_detect_moved),
            view: self.view,
            color: self.color,
            max_lines: self.max_lines,
            timeout_ms: self.timeout_ms,
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Run the comparison, returning whether the texts differ
fn run(cli: &Cli) -> Result<bool> {
    if cli.original.as_os_str() == "-" && cli.modified.as_os_str() == "-" {
        bail!("only one side can be read from stdin");
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let resolved = Resolved::merge(&settings, &cli.overrides());
    debug!("resolved settings: {:?}", resolved);

    let color = match resolved.color {
        ColorMode::Always => {
            colored::control::set_override(true);
            true
        }
        ColorMode::Never => {
            colored::control::set_override(false);
            false
        }
        ColorMode::Auto => true,
    };

    let original = read_input(&cli.original)?;
    let modified = read_input(&cli.modified)?;

    info!(
        "comparing {} and {}",
        cli.original.display(),
        cli.modified.display()
    );
    let result = resolved.config().compare(&original, &modified)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match resolved.view {
        ViewMode::Unified => view::write_unified(&mut out, &result, color)?,
        ViewMode::Split => view::write_split(&mut out, &result, color)?,
        ViewMode::Json => view::write_json(&mut out, &result)?,
    }
    if cli.stats {
        view::write_stats(&mut out, &result.stats())?;
    }
    out.flush()?;

    Ok(result.has_changes())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("shams: {:#}", err);
            ExitCode::from(2)
        }
    }
}
