use std::path::PathBuf;

use serde::Deserialize;

/// The config file. Every key is optional; anything unset falls back to
/// the built-in defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) address: Option<String>,
    pub(crate) port: Option<u64>,
    pub(crate) interval: Option<StringOrNum>,
    pub(crate) source: Option<PathBuf>,
    pub(crate) log_level: Option<String>,
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}
