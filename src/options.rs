//! How options are resolved from arguments, environment variables, and the
//! config file.
//!
//! Arguments (and their environment variables) win over the config file,
//! which wins over the defaults in [`crate::constants`].

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

pub use error::{OptionError, OptionResult};
use log::LevelFilter;

use self::{
    args::ExporterArgs,
    config::{Config, StringOrNum},
};
use crate::constants::*;

/// The fully resolved exporter options.
#[derive(Clone, Debug, PartialEq)]
pub struct ExporterOptions {
    pub address: IpAddr,
    pub port: u16,
    pub interval: Duration,
    pub source: PathBuf,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl ExporterOptions {
    /// The address the metrics endpoint should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Reads the config file at `path`, or returns an empty config if there is none.
pub fn get_config(path: Option<&Path>) -> OptionResult<Config> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|err| {
                OptionError::config(format!(
                    "could not read the config file at '{}', {err}",
                    path.display()
                ))
            })?;

            Ok(toml_edit::de::from_str(&contents)?)
        }
        None => Ok(Config::default()),
    }
}

/// Resolves all options from the given arguments and config.
pub fn init_options(args: &ExporterArgs, config: &Config) -> OptionResult<ExporterOptions> {
    Ok(ExporterOptions {
        address: get_address(args, config)?,
        port: get_port(args, config)?,
        interval: get_interval(args, config)?,
        source: get_source(args, config),
        log_level: get_log_level(args, config)?,
        log_file: args
            .logging_args
            .log_file
            .clone()
            .or_else(|| config.log_file.clone()),
    })
}

fn get_address(args: &ExporterArgs, config: &Config) -> OptionResult<IpAddr> {
    if let Some(address) = &args.general_args.address {
        IpAddr::from_str(address.trim()).map_err(|_| OptionError::invalid_arg_value("address"))
    } else if let Some(address) = &config.address {
        IpAddr::from_str(address.trim()).map_err(|_| OptionError::invalid_config_value("address"))
    } else {
        Ok(DEFAULT_ADDRESS)
    }
}

fn get_port(args: &ExporterArgs, config: &Config) -> OptionResult<u16> {
    if let Some(port) = &args.general_args.port {
        let port = port
            .trim()
            .parse::<u64>()
            .map_err(|_| OptionError::invalid_arg_value("port"))?;

        check_port(port).ok_or_else(|| OptionError::arg("'--port' must be between 1 and 65535."))
    } else if let Some(port) = config.port {
        check_port(port).ok_or_else(|| OptionError::config("'port' must be between 1 and 65535."))
    } else {
        Ok(DEFAULT_PORT)
    }
}

fn check_port(port: u64) -> Option<u16> {
    u16::try_from(port).ok().filter(|port| *port != 0)
}

/// Parses a duration given either in milliseconds or as a human-readable duration.
fn try_parse_ms(s: &str) -> Result<Duration, ()> {
    let s = s.trim();

    if let Ok(ms) = s.parse::<u64>() {
        Ok(Duration::from_millis(ms))
    } else {
        humantime::parse_duration(s).map_err(|_| ())
    }
}

fn get_interval(args: &ExporterArgs, config: &Config) -> OptionResult<Duration> {
    if let Some(interval) = &args.general_args.interval {
        let interval =
            try_parse_ms(interval).map_err(|_| OptionError::invalid_arg_value("interval"))?;

        check_interval(interval)
            .map_err(|reason| OptionError::arg(format!("'--interval' {reason}")))
    } else if let Some(interval) = &config.interval {
        let interval = match interval {
            StringOrNum::String(s) => {
                try_parse_ms(s).map_err(|_| OptionError::invalid_config_value("interval"))?
            }
            StringOrNum::Num(ms) => Duration::from_millis(*ms),
        };

        check_interval(interval)
            .map_err(|reason| OptionError::config(format!("'interval' {reason}")))
    } else {
        Ok(DEFAULT_INTERVAL)
    }
}

fn check_interval(interval: Duration) -> Result<Duration, &'static str> {
    if interval < MIN_INTERVAL {
        Err("must be at least 100ms.")
    } else if interval > MAX_INTERVAL {
        Err("must be at most 1h.")
    } else {
        Ok(interval)
    }
}

fn get_source(args: &ExporterArgs, config: &Config) -> PathBuf {
    args.general_args
        .source
        .clone()
        .or_else(|| config.source.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNTIME_PATH))
}

fn get_log_level(args: &ExporterArgs, config: &Config) -> OptionResult<LevelFilter> {
    if let Some(level) = &args.logging_args.log_level {
        LevelFilter::from_str(level.trim()).map_err(|_| OptionError::invalid_arg_value("log_level"))
    } else if let Some(level) = &config.log_level {
        LevelFilter::from_str(level.trim())
            .map_err(|_| OptionError::invalid_config_value("log_level"))
    } else {
        Ok(DEFAULT_LOG_LEVEL)
    }
}
