// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself. That also means no inner doc comments here.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "npu_exporter [OPTIONS]";

/// The arguments for the exporter.
///
/// Every option can also be given through an environment variable; the
/// command line takes precedence, then the environment, then the config file.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct ExporterArgs {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub logging_args: LoggingArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        long,
        value_name = "ADDRESS",
        env = "NPU_EXPORTER_ADDRESS",
        help = "Sets the address the metrics endpoint binds to.",
        long_help = "Sets the IP address the metrics endpoint binds to. Defaults to 0.0.0.0."
    )]
    pub address: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        env = "NPU_EXPORTER_CONFIG",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Values given as arguments or environment variables override the config file."
    )]
    pub config_location: Option<PathBuf>,

    #[arg(
        short = 'i',
        long,
        value_name = "TIME",
        env = "NPU_EXPORTER_INTERVAL",
        help = "Sets how often the runtime counter is sampled.",
        long_help = "Sets how often the runtime counter is sampled. Takes a number in milliseconds or a \
                    human-readable duration (e.g. 5s). The minimum is 100ms, the maximum is 1h, and \
                    defaults to 1s."
    )]
    pub interval: Option<String>,

    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        env = "NPU_EXPORTER_PORT",
        help = "Sets the TCP port the metrics endpoint listens on.",
        long_help = "Sets the TCP port the metrics endpoint listens on. Defaults to 8000."
    )]
    pub port: Option<String>,

    #[arg(
        short = 's',
        long,
        value_name = "PATH",
        env = "NPU_EXPORTER_SOURCE",
        help = "Sets the file the NPU runtime counter is read from.",
        long_help = indoc! {
            "Sets the file the NPU runtime counter is read from. The file should contain the number of \
            milliseconds the device has been active. Defaults to \
            /sys/devices/pci0000:00/0000:00:0b.0/power/runtime_active_time."
        }
    )]
    pub source: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Logging Options")]
pub struct LoggingArgs {
    #[arg(
        long = "log_file",
        value_name = "PATH",
        help = "Also writes logs to the given file."
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "log_level",
        value_name = "LEVEL",
        env = "NPU_EXPORTER_LOG_LEVEL",
        help = "Sets the minimum log level.",
        long_help = "Sets the minimum log level. One of error, warn, info, debug, or trace. Defaults to info."
    )]
    pub log_level: Option<String>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short='v', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`ExporterArgs`].
pub fn build_cmd() -> Command {
    ExporterArgs::command()
}
