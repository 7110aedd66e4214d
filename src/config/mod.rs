use anyhow::{anyhow, bail, Context as _, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ukgeolocate.toml";

const ENV_NAME_EPC_DB: &str = "EPCLOCATIONS_DB";
const ENV_NAME_OS_DB: &str = "OSOPENUPRN_DB";
const ENV_NAME_MATCH_THRESHOLD: &str = "UKGEOLOCATE_MATCH_THRESHOLD";

#[derive(Debug, Clone)]
pub struct Config {
    pub datasets: Datasets,
    pub pool: Pool,
    pub matching: Matching,
}

#[derive(Debug, Clone)]
pub struct Datasets {
    pub epc_db: PathBuf,
    pub os_db: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Pool {
    pub max_size: u32,
    pub connection_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Matching {
    /// Within [0, 1]
    pub threshold: f64,
}

pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("Match threshold must be within [0, 1], got {threshold}");
    }
    Ok(threshold)
}

impl Config {
    /// Load the configuration file, falling back to the defaults.
    ///
    /// An explicitly given file must exist.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                log::debug!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                raw::Config::default()
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Unable to read configuration file {}", file_path.display())
                });
            }
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var(ENV_NAME_EPC_DB) {
            self.datasets.epc_db = path.into();
        }
        if let Some(path) = var(ENV_NAME_OS_DB) {
            self.datasets.os_db = path.into();
        }
        if let Some(threshold) = var(ENV_NAME_MATCH_THRESHOLD) {
            let threshold = threshold
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_MATCH_THRESHOLD}: '{threshold}'"))?;
            self.matching.threshold = validate_threshold(threshold)?;
        }
        Ok(())
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            datasets,
            pool,
            matching,
        } = from;

        let raw::Datasets { epc_db, os_db } = datasets.unwrap_or_default();
        let defaults = raw::Datasets::default();
        let datasets = Datasets {
            epc_db: epc_db
                .or(defaults.epc_db)
                .ok_or_else(|| anyhow!("Missing EPC database path"))?,
            os_db: os_db
                .or(defaults.os_db)
                .ok_or_else(|| anyhow!("Missing OS Open UPRN database path"))?,
        };

        let raw::Pool {
            max_size,
            connection_timeout,
        } = pool.unwrap_or_default();
        let defaults = raw::Pool::default();
        let max_size = max_size
            .or(defaults.max_size)
            .ok_or_else(|| anyhow!("Missing connection pool size"))?;
        if max_size == 0 {
            bail!("Connection pool size must be greater than 0");
        }
        let pool = Pool {
            max_size,
            connection_timeout: connection_timeout
                .or(defaults.connection_timeout)
                .ok_or_else(|| anyhow!("Missing connection timeout"))?,
        };

        let raw::Matching { threshold } = matching.unwrap_or_default();
        let threshold = threshold
            .or(raw::Matching::default().threshold)
            .ok_or_else(|| anyhow!("Missing match threshold"))?;
        let matching = Matching {
            threshold: validate_threshold(threshold)?,
        };

        Ok(Self {
            datasets,
            pool,
            matching,
        })
    }
}
