use crate::charset::CharacterSet;
use crate::tokenizer::{tokenize, Kind, Token};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// The token stream of one identifier.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub identifier: &'a str,
    pub tokens: Vec<Token<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(identifier: &'a str, characters: &'a CharacterSet) -> Self {
        Self {
            identifier,
            tokens: tokenize(identifier, characters),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.tokens.iter().any(|t| t.kind == Kind::Invalid)
    }

    fn visible_tokens(&self, words_only: bool) -> impl Iterator<Item = &Token<'a>> {
        self.tokens
            .iter()
            .filter(move |t| !(words_only && t.kind == Kind::Symbol))
    }
}

#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    kind: String,
    value: &'a str,
    uppercase: bool,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    identifier: &'a str,
    valid: bool,
    tokens: Vec<JsonToken<'a>>,
}

pub fn print_reports(
    reports: &[Report<'_>],
    colored_output: bool,
    format: &OutputFormat,
    words_only: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                println!("{}", render_text(report, colored_output, words_only));
            }
        }
        OutputFormat::Json => println!("{}", render_json(reports, words_only)?),
    }
    Ok(())
}

pub fn render_text(report: &Report<'_>, colored_output: bool, words_only: bool) -> String {
    let tokens = report
        .visible_tokens(words_only)
        .map(|t| format_token(t, colored_output))
        .collect::<Vec<_>>()
        .join(" ");

    if colored_output {
        format!("{}: {}", report.identifier.bold(), tokens)
    } else {
        format!("{}: {}", report.identifier, tokens)
    }
}

fn format_token(token: &Token<'_>, colored: bool) -> String {
    match token.kind {
        Kind::Invalid => {
            let text = format!("<invalid {:?}>", token.value);
            if colored {
                text.red().bold().to_string()
            } else {
                text
            }
        }
        Kind::Word if colored && token.uppercase() => token.value.cyan().bold().to_string(),
        Kind::Word if colored => token.value.green().to_string(),
        Kind::Symbol if colored => token.value.dimmed().to_string(),
        _ => token.value.to_string(),
    }
}

pub fn render_json(reports: &[Report<'_>], words_only: bool) -> Result<String> {
    let output: Vec<JsonReport> = reports
        .iter()
        .map(|r| JsonReport {
            identifier: r.identifier,
            valid: r.is_valid(),
            tokens: r
                .visible_tokens(words_only)
                .map(|t| JsonToken {
                    kind: t.kind.to_string(),
                    value: t.value,
                    uppercase: t.uppercase(),
                })
                .collect(),
        })
        .collect();

    serde_json::to_string_pretty(&output).context("Failed to serialize tokens")
}

pub fn print_summary(total: usize, invalid: usize, colored: bool) {
    let noun = |n: usize| if n == 1 { "identifier" } else { "identifiers" };

    println!();
    if invalid == 0 {
        let message = format!("✓ {} {} tokenized", total, noun(total));
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else if colored {
        println!(
            "{} {} of {} {} contain inadmissible characters",
            "✗".red().bold(),
            invalid.to_string().red().bold(),
            total,
            noun(total)
        );
    } else {
        println!(
            "✗ {} of {} {} contain inadmissible characters",
            invalid,
            total,
            noun(total)
        );
    }
}
