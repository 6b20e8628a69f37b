//! CLI for extracting and exporting Trac ticket labels
//!
//! Run `label-import --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use label_import::{
    load_tickets, DryRunClient, JsonLinesClient, LabelPipeline, LabelSet, PipelineConfig,
    Tickets,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "label-import")]
#[command(about = "Extract labels from Trac tickets for import into GitLab")]
#[command(version)]
struct Cli {
    /// Output format: json, text
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Label categories to extract (comma-separated, blank for the default set)
    #[arg(short, long, env = "LABEL_IMPORT_CATEGORIES", global = true)]
    categories: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the label catalog extracted from a ticket dump
    List {
        /// Ticket dump (JSON object of ticket id -> ticket)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Write each distinct label as a JSON line for a downstream importer
    Export {
        /// Ticket dump (JSON object of ticket id -> ticket)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Log the labels that would be created without writing anything
    DryRun {
        /// Ticket dump (JSON object of ticket id -> ticket)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing on stderr so stdout stays clean for reports
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = pipeline_config(cli.categories.as_deref())?;
    let mut pipeline = LabelPipeline::new(config);

    match cli.command {
        Commands::List { input } => {
            let tickets = read_input(&input)?;
            let labels = pipeline.collect_labels(&tickets);
            print_labels(&labels, cli.format)?;
        }
        Commands::Export { input, output } => {
            let tickets = read_input(&input)?;
            let created = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    export(&mut pipeline, &tickets, BufWriter::new(file))?
                }
                None => export(&mut pipeline, &tickets, io::stdout().lock())?,
            };
            info!(labels = created, "Export complete");
        }
        Commands::DryRun { input } => {
            let tickets = read_input(&input)?;
            let mut client = DryRunClient::new();
            pipeline
                .create_labels(&tickets, &mut client)
                .context("Dry run failed")?;
            println!("{} labels would be created", client.created());
        }
    }

    Ok(())
}

/// Build the pipeline configuration from the `--categories` value.
fn pipeline_config(categories: Option<&str>) -> Result<PipelineConfig> {
    categories
        .map_or_else(|| Ok(PipelineConfig::default()), PipelineConfig::parse)
        .context("Invalid --categories")
}

fn read_input(path: &Path) -> Result<Tickets> {
    load_tickets(path).with_context(|| format!("Failed to load tickets from {}", path.display()))
}

fn export<W: Write>(
    pipeline: &mut LabelPipeline,
    tickets: &Tickets,
    writer: W,
) -> Result<usize> {
    let mut client = JsonLinesClient::new(writer);
    let created = pipeline
        .create_labels(tickets, &mut client)
        .context("Failed to export labels")?;
    client.into_inner().context("Failed to flush output")?;
    Ok(created)
}

fn print_labels(labels: &LabelSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let values: Vec<_> = labels.values().collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        OutputFormat::Text => {
            if labels.is_empty() {
                println!("No labels found");
                return Ok(());
            }
            println!("{} labels:", labels.len());
            for label in labels.values() {
                println!(
                    "  {:<24} {:<12} {}",
                    label.title,
                    label.category.as_str(),
                    label.color
                );
            }
        }
    }
    Ok(())
}
