//! Matchday CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use matchday_engine::League;
use matchday_runtime::{
    BatchPolicy, IngestConfig, Ingestor, demo_roster, render_results, render_scorers,
    render_standings,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    keep_accepted: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--keep-accepted" => config.keep_accepted = true,
            "--trace" => config.trace = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.files.push(PathBuf::from(&arg)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("matchday {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.files.is_empty() {
        return Err("no report files given (see --help)".into());
    }

    if config.trace {
        if let Err(e) = install_tracing() {
            eprintln!("\x1b[33mWarning: tracing disabled: {e}\x1b[0m");
        }
    }

    let roster = demo_roster().map_err(|e| e.report())?;
    let policy = if config.keep_accepted {
        BatchPolicy::KeepAccepted
    } else {
        BatchPolicy::AllOrNothing
    };
    let ingestor = Ingestor::new(&roster, IngestConfig::new().with_batch_policy(policy));

    let mut league = League::new();
    for file in &config.files {
        let matches = ingestor
            .load_file(&mut league, file)
            .map_err(|e| e.report())?;
        eprintln!("Loaded {} match(es) from {}", matches.len(), file.display());
    }

    println!("{}", render_standings(&league.standings(), &roster));
    println!("{}", render_scorers(&league.top_scorers(), &roster));
    print!("{}", render_results(&league.results()));
    Ok(())
}

/// Installs a stderr subscriber at DEBUG level.
fn install_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
}

fn print_help() {
    println!(
        "\x1b[1mMatchday\x1b[0m - League report loader

\x1b[1mUSAGE:\x1b[0m
    matchday [OPTIONS] <REPORT>...

\x1b[1mARGUMENTS:\x1b[0m
    <REPORT>...    Match report files, loaded in order

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --keep-accepted    Keep matches accepted before a rejected one
    --trace            Log ingestion to stderr

Reports are checked against the built-in roster (BAR, RMA, LIV, MCI).
After loading, the standings, top scorers and results are printed."
    );
}
