//! Extract job fields from one saved page and print them as JSON.
//!
//! Usage: extract_job [--file PATH] [--url URL] [--save STORE.json] [--block DOMAIN]...
//!
//! Reads HTML from stdin unless `--file` is given. Logs go to stderr
//! (filtered by `RUST_LOG`), so stdout carries only the JSON result.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use rs_jobscrape::store::{JsonFileStore, RecordSink};
use rs_jobscrape::url_utils::guard_domain;
use rs_jobscrape::{extract_job_bytes, SavedJob};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: extract_job [--file PATH] [--url URL] [--save STORE.json] [--block DOMAIN]...";

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    url: String,
    save: Option<PathBuf>,
    blocked: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--file" => parsed.file = Some(PathBuf::from(value("--file")?)),
            "--url" => parsed.url = value("--url")?,
            "--save" => parsed.save = Some(PathBuf::from(value("--save")?)),
            "--block" => parsed.blocked.push(value("--block")?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {other}\n{USAGE}")),
        }
    }

    Ok(parsed)
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut html = Vec::new();
            io::stdin().read_to_end(&mut html)?;
            Ok(html)
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let blocked: Vec<&str> = args.blocked.iter().map(String::as_str).collect();
    guard_domain(&args.url, &blocked)?;

    let html = read_input(args.file.as_ref())?;
    tracing::debug!(bytes = html.len(), "read page");

    let job = extract_job_bytes(&html, &args.url);

    if let Some(path) = &args.save {
        JsonFileStore::new(path).append(SavedJob::from_result(&job))?;
        tracing::info!(path = %path.display(), "job saved");
    }

    println!("{}", serde_json::to_string_pretty(&job)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("extract_job: {err}");
        process::exit(1);
    }
}
