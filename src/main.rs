// SPDX-License-Identifier: PMPL-1.0-or-later

//! lookup-formatter: convert localized game-data JSON into Lua lookup tables
//!
//! Reads `<type>_data.json` from `<output-root>/<lang>/` and writes the
//! matching `lookup*.lua` fragment next to it.

use anyhow::{Context, Result};
use clap::Parser;
use lookup_formatter::config::ConfigFile;
use lookup_formatter::formatter::{self, Formatter};
use lookup_formatter::{FormatterConfig, LocaleCode, RecordType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lookup-formatter")]
#[command(version)]
#[command(about = "Convert localized game-data JSON into Lua lookup-table fragments")]
#[command(long_about = None)]
struct Cli {
    /// Locale code (en, de, fr, es, ru, cn, pt)
    #[arg(short, long)]
    lang: Option<String>,

    /// Record type to convert
    #[arg(short = 't', long = "type", value_enum)]
    record_type: Option<RecordTypeArg>,

    /// Directory holding one subdirectory per locale
    #[arg(short, long, env = "LOOKUP_OUTPUT_ROOT")]
    output_root: Option<PathBuf>,

    /// JSON or YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress progress notices
    #[arg(short, long)]
    quiet: bool,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RecordTypeArg {
    Item,
    Npc,
    Object,
    Quest,
}

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Item => RecordType::Item,
            RecordTypeArg::Npc => RecordType::Npc,
            RecordTypeArg::Object => RecordType::Object,
            RecordTypeArg::Quest => RecordType::Quest,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let lang = cli
        .lang
        .or_else(|| file.lang.clone())
        .unwrap_or_else(|| LocaleCode::default().code().to_string());
    let record_type = match (cli.record_type, &file.record_type) {
        (Some(arg), _) => arg.into(),
        (None, Some(raw)) => RecordType::parse(raw)
            .context("reading record type from config")?,
        (None, None) => RecordType::default(),
    };

    let mut config: FormatterConfig = file.into_config();
    if let Some(root) = cli.output_root {
        config.output_root = root;
    }
    config.quiet |= cli.quiet;

    let formatter = Formatter::new(config);
    let summary = formatter
        .run(&lang, record_type)
        .with_context(|| format!("formatting {} records for '{}'", record_type, lang))?;

    if !formatter.config().quiet {
        formatter::print_summary(&summary);
    }

    Ok(())
}
