//! fshare-grab - inspect release name normalization and season selection
//!
//! Reads filenames from the command line, or JSON hit/candidate arrays from
//! stdin, and prints JSON results on stdout. Logs go to stderr.

mod cli;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fshare_grab::services::candidates_from_json;
use fshare_grab::{Config, RelevanceScorer, SearchHit, SmartGrab, extract_group, parse};

use crate::cli::{CliOptions, Command, USAGE};

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let options = CliOptions::from_args();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fshare_grab=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            options
                .json_logs
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)),
        )
        .with(
            (!options.json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let Some(command) = options.command else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };

    let output = run(command, &config)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output).context("Failed to write output")?;
    writeln!(stdout)?;

    Ok(ExitCode::SUCCESS)
}

fn run(command: Command, config: &Config) -> Result<JsonValue> {
    match command {
        Command::Normalize(names) => {
            let records: Vec<_> = names.iter().map(|name| parse(name)).collect();
            Ok(serde_json::to_value(records)?)
        }
        Command::Group(names) => Ok(JsonValue::Array(
            names
                .iter()
                .map(|name| json!({ "name": name, "group": extract_group(name) }))
                .collect(),
        )),
        Command::Rank { query } => {
            let hits: Vec<SearchHit> = read_stdin_array()?
                .into_iter()
                .enumerate()
                .filter_map(|(index, value)| match serde_json::from_value(value) {
                    Ok(hit) => Some(hit),
                    Err(e) => {
                        tracing::warn!(index = index, error = %e, "Skipping search hit");
                        None
                    }
                })
                .collect();
            let ranked = RelevanceScorer::new(config.relevance).rank_hits(hits, &query);
            Ok(serde_json::to_value(ranked)?)
        }
        Command::Grab { season } => {
            let candidates = candidates_from_json(&read_stdin_array()?);
            let grab = SmartGrab::new(config);
            let grab = match season {
                Some(season) => grab.for_season(season),
                None => grab,
            };
            Ok(serde_json::to_value(grab.select(&candidates))?)
        }
    }
}

fn read_stdin_array() -> Result<Vec<JsonValue>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    serde_json::from_str(&input).context("stdin must hold a JSON array")
}
