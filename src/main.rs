use anyhow::Context as _;
use clap::Parser as _;
use std::{io, process::ExitCode};

use ukgeo_application::{Error, ErrorKind, Geolocator, GeolocatorOptions, PoolOptions};
use ukgeo_boundary as boundary;

mod cli;
mod config;
mod display;
mod interactive;

use self::{
    cli::{Cli, Command},
    config::Config,
};

const EXIT_FAILURE: u8 = 1;
const EXIT_DATABASE: u8 = 2;

fn exit_status_of(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::InvalidPostcode | ErrorKind::NoMatchFound => EXIT_FAILURE,
        ErrorKind::DatabaseNotFound | ErrorKind::DatabaseInvalid | ErrorKind::Other => {
            EXIT_DATABASE
        }
    }
}

fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidPostcode => "invalid_postcode",
        ErrorKind::NoMatchFound => "no_match_found",
        ErrorKind::DatabaseNotFound => "database_not_found",
        ErrorKind::DatabaseInvalid => "database_invalid",
        ErrorKind::Other => "other",
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut cfg = Config::try_load_from_file_or_default(cli.config.as_ref())
        .context("Failed to load configuration")?;
    if let Some(path) = &cli.epc_db {
        cfg.datasets.epc_db = path.clone();
    }
    if let Some(path) = &cli.os_db {
        cfg.datasets.os_db = path.clone();
    }
    if let Some(threshold) = cli.threshold {
        cfg.matching.threshold = threshold;
    }
    Ok(cfg)
}

fn open_geolocator(cfg: &Config) -> Result<Geolocator, Error> {
    let options = GeolocatorOptions {
        match_threshold: cfg.matching.threshold,
        pool: PoolOptions {
            max_size: cfg.pool.max_size,
            connection_timeout: cfg.pool.connection_timeout,
        },
    };
    Geolocator::open(&cfg.datasets.epc_db, &cfg.datasets.os_db, options)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn lookup(geo: &Geolocator, postcode: &str, address: &str, as_json: bool) -> anyhow::Result<ExitCode> {
    match geo.find_coordinates(postcode, address) {
        Ok(res) => {
            if as_json {
                print_json(&boundary::LookupResult::from(res))?;
            } else {
                for line in display::plain_lines(&res) {
                    println!("{line}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let kind = err.kind();
            if as_json {
                print_json(&boundary::Error {
                    kind: kind_name(kind).to_owned(),
                    message: err.to_string(),
                })?;
            } else {
                match &err {
                    Error::InvalidPostcode(raw) => eprintln!("Invalid postcode: {raw}"),
                    Error::NoMatchFound { .. } => eprintln!("No match found."),
                    Error::Repo(_) => eprintln!("Error: {err}"),
                }
            }
            Ok(ExitCode::from(exit_status_of(kind)))
        }
    }
}

fn health(geo: &Geolocator, as_json: bool) -> anyhow::Result<ExitCode> {
    let status = geo.health_check();
    let healthy = status.healthy;
    if as_json {
        print_json(&boundary::HealthStatus::from(status))?;
    } else {
        for line in display::health_lines(&status) {
            println!("{line}");
        }
    }
    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILURE)
    })
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cfg = load_config(&cli)?;
    log::debug!("{cfg:?}");

    let geo = match open_geolocator(&cfg) {
        Ok(geo) => geo,
        Err(err) => {
            log::error!("Failed to open databases: {err}");
            eprintln!("Error: {err}");
            eprintln!(
                "Set EPCLOCATIONS_DB and OSOPENUPRN_DB environment variables, \
                 or run from the directory containing the databases."
            );
            return Ok(ExitCode::from(exit_status_of(err.kind())));
        }
    };

    let Cli {
        command, lookup: args, ..
    } = cli;
    let exit_code = match (command, args.postcode, args.address) {
        (Some(Command::Health { json }), _, _) => health(&geo, json)?,
        (None, Some(postcode), Some(address)) => lookup(&geo, &postcode, &address, args.json)?,
        (None, _, _) => {
            let stdin = io::stdin();
            interactive::run(&geo, stdin.lock(), io::stdout())?;
            ExitCode::SUCCESS
        }
    };
    geo.close();
    Ok(exit_code)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_DATABASE)
        }
    }
}
