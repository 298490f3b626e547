use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use floridaman_core::config::{expand_path, Config};
use floridaman_core::data_processor::DataProcessor;
use floridaman_core::traits::SearchOutcome;
use floridaman_core::types::{SampleHeadline, SearchHit, Trope};
use floridaman_geo::{normalize_location, resolve_county};
use floridaman_stats::Reservoir;
use floridaman_story::Story;

const USAGE: &str = "Usage: floridaman <stats|digest|map|search|picks|samples|county> [args...] [--data PATH] [--limit N] [--seed N]";
const DEFAULT_RECORDS_PATH: &str = "data/florida_man.json";

struct Options {
    data: Option<PathBuf>,
    limit: Option<usize>,
    seed: Option<u64>,
    positional: Vec<String>,
}

fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i + 1).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("Error: {flag} requires a value");
            std::process::exit(1)
        }
    }
}

fn parse_args() -> (String, Options) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    let mut opts = Options { data: None, limit: None, seed: None, positional: Vec::new() };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => { opts.data = Some(flag_value(&args, i, "--data")); i += 1; }
            "--limit" => { opts.limit = Some(flag_value(&args, i, "--limit")); i += 1; }
            "--seed" => { opts.seed = Some(flag_value(&args, i, "--seed")); i += 1; }
            other => opts.positional.push(other.to_string()),
        }
        i += 1;
    }
    (cmd, opts)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_story(config: &Config, opts: &Options, rng: &mut StdRng) -> anyhow::Result<Story> {
    let path = match &opts.data {
        Some(p) => p.clone(),
        None => expand_path(config.get::<String>("data.records_path").unwrap_or_else(|_| DEFAULT_RECORDS_PATH.to_string())),
    };
    let processor = opts.limit.map_or_else(DataProcessor::new, DataProcessor::with_limit);
    let records = processor.load(&path).with_context(|| format!("loading records from {}", path.display()))?;
    let settings = config.settings()?;
    Ok(Story::build(records, &settings, rng))
}

#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    outcome: &'static str,
    hits: &'a [SearchHit],
}

#[derive(Serialize)]
struct SampleReport<'a> {
    trope: Trope,
    cue: &'a [SampleHeadline],
    other: &'a [SampleHeadline],
}

fn trope_samples(buckets: &BTreeMap<Trope, Reservoir<SampleHeadline>>, trope: Trope) -> &[SampleHeadline] {
    buckets.get(&trope).map(Reservoir::items).unwrap_or_default()
}

#[derive(Serialize)]
struct CountyReport<'a> {
    location: &'a str,
    normalized: String,
    county: Option<&'static str>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (cmd, opts) = parse_args();
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cmd.as_str() {
        "stats" => print_json(load_story(&config, &opts, &mut rng)?.stats())?,
        "digest" => print_json(&load_story(&config, &opts, &mut rng)?.digest())?,
        "map" => print_json(load_story(&config, &opts, &mut rng)?.choropleth())?,
        "picks" => {
            let story = load_story(&config, &opts, &mut rng)?;
            print_json(&story.pure_picks(&mut rng))?;
        }
        "search" => {
            let query = opts.positional.join(" ");
            let story = load_story(&config, &opts, &mut rng)?;
            let outcome = story.search(&query);
            let label = match &outcome {
                SearchOutcome::EmptyQuery => "emptyQuery",
                SearchOutcome::Ranked(_) => "ranked",
                SearchOutcome::Fuzzy(_) => "fuzzy",
                SearchOutcome::NoMatches => "noMatches",
            };
            info!(query = %query, outcome = label, hits = outcome.hits().len(), "search finished");
            print_json(&SearchReport { query: &query, outcome: label, hits: outcome.hits() })?;
        }
        "samples" => {
            let Some(trope) = opts.positional.first().and_then(|k| Trope::from_key(k)) else {
                eprintln!("Usage: floridaman samples <animals|nudity|substances|weapons>");
                std::process::exit(1);
            };
            let story = load_story(&config, &opts, &mut rng)?;
            let stats = story.stats();
            print_json(&SampleReport {
                trope,
                cue: trope_samples(&stats.samples_cue, trope),
                other: trope_samples(&stats.samples_other, trope),
            })?;
        }
        "county" => {
            if opts.positional.is_empty() {
                eprintln!("Usage: floridaman county \"<location>\"");
                std::process::exit(1);
            }
            let location = opts.positional.join(" ");
            print_json(&CountyReport {
                location: &location,
                normalized: normalize_location(&location),
                county: resolve_county(&location),
            })?;
        }
        _ => {
            eprintln!("Unknown command: {}\n{USAGE}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
