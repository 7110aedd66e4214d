use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("ukgeolocate.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub datasets: Option<Datasets>,
    pub pool: Option<Pool>,
    pub matching: Option<Matching>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Datasets {
    pub epc_db: Option<PathBuf>,
    pub os_db: Option<PathBuf>,
}

impl Default for Datasets {
    fn default() -> Self {
        Config::default().datasets.expect("Datasets configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pool {
    pub max_size: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub connection_timeout: Option<Duration>,
}

impl Default for Pool {
    fn default() -> Self {
        Config::default().pool.expect("Pool configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Matching {
    pub threshold: Option<f64>,
}

impl Default for Matching {
    fn default() -> Self {
        Config::default().matching.expect("Matching configuration")
    }
}
