use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use npu_exporter::{
    collection::{runtime::RuntimeReader, RuntimeCollector},
    create_collection_thread,
    metrics::MetricsRegistry,
    options::{args::ExporterArgs, get_config, init_options},
    server::run_server,
    utils::{cancellation_token::CancellationToken, logging::init_logger},
};
use tokio::{net::TcpListener, sync::watch};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ExporterArgs::parse();

    let config = get_config(args.general_args.config_location.as_deref())
        .context("Unable to properly parse or read the config file.")?;
    let options = init_options(&args, &config)?;

    init_logger(options.log_level, options.log_file.as_deref())
        .context("Unable to set up logging.")?;

    let registry = MetricsRegistry::new().context("Unable to register the NPU metrics.")?;

    let addr = options.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to listen on '{addr}'."))?;

    // Set termination hook
    let cancellation_token = Arc::new(CancellationToken::default());
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);
    {
        let cancellation_token = cancellation_token.clone();
        ctrlc::set_handler(move || {
            cancellation_token.cancel();
            let _ = shutdown_sender.send(true);
        })?;
    }

    info!(
        "sampling '{}' every {}",
        options.source.display(),
        humantime::format_duration(options.interval)
    );
    let collection_thread = create_collection_thread(
        RuntimeCollector::new(RuntimeReader::new(&options.source)),
        registry.npu().clone(),
        options.interval,
        cancellation_token.clone(),
    );

    let shutdown = async move {
        let _ = shutdown_receiver.wait_for(|stop| *stop).await;
        info!("shutting down");
    };
    let served = run_server(listener, registry, shutdown).await;

    cancellation_token.cancel();
    collection_thread
        .join()
        .map_err(|_| anyhow!("The collection thread panicked."))?;

    served.context("The metrics server stopped unexpectedly.")
}
