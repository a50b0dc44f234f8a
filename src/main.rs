use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use identsplit::cli::output::{self, OutputFormat, Report};
use identsplit::{logging, Config};
use std::io::{self, BufRead};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "identsplit")]
#[command(version, about = "Split identifiers into words on case boundaries", long_about = None)]
struct Cli {
    /// Identifiers to split (read from stdin, one per line, when omitted)
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Admissible characters (replaces the configured set)
    #[arg(short, long, env = "IDENTSPLIT_CHARACTERS")]
    characters: Option<String>,

    /// Additional admissible characters
    #[arg(short, long)]
    extra: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Omit symbol tokens from the output
    #[arg(short, long)]
    words_only: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if an identifier is invalid
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "identsplit", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.characters.clone(), cli.extra.clone(), cli.words_only)?;
    let characters = config.character_set()?;
    debug!(characters = %characters, "admissible set");

    let identifiers = if cli.identifiers.is_empty() {
        read_identifiers(io::stdin().lock())?
    } else {
        cli.identifiers.clone()
    };

    if identifiers.is_empty() {
        anyhow::bail!("No identifiers given. Use --help for usage information.");
    }

    let reports: Vec<Report> = identifiers
        .iter()
        .map(|identifier| Report::new(identifier, &characters))
        .collect();

    let colored = !cli.no_color;
    output::print_reports(&reports, colored, &cli.format, config.words_only)?;

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    info!(total = reports.len(), invalid, "tokenized identifiers");

    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(reports.len(), invalid, colored);
    }

    // Exit with appropriate code
    if invalid > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_identifiers(reader: impl BufRead) -> Result<Vec<String>> {
    let mut identifiers = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read identifiers from stdin")?;
        // `lines` strips the terminator; surrounding whitespace stays part of the identifier
        if !line.is_empty() {
            identifiers.push(line);
        }
    }
    Ok(identifiers)
}
