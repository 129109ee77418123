use std::{
    net::{IpAddr, Ipv4Addr},
    time::Duration,
};

/// Milliseconds the NPU has spent active, from the runtime PM attributes of
/// its sysfs node on current Intel client platforms.
pub const DEFAULT_RUNTIME_PATH: &str =
    "/sys/devices/pci0000:00/0000:00:0b.0/power/runtime_active_time";

pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// The path the metrics are served on.
pub const METRICS_PATH: &str = "/metrics";
