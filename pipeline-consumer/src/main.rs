//! Poll the processor every few seconds, and expose `/consume` to do the same on demand.
use envconfig::Envconfig;
use eyre::{Result, WrapErr};
use tokio_util::sync::CancellationToken;

use pipeline_common::logging::setup_tracing;
use pipeline_common::metrics::{serve, setup_metrics_recorder};
use pipeline_common::shutdown::cancel_on_shutdown_signal;
use pipeline_common::upstream::UpstreamClient;
use pipeline_consumer::config::Config;
use pipeline_consumer::fetch::FetchClient;
use pipeline_consumer::handlers;
use pipeline_consumer::poller::Poller;

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    tracing::info!("consumer starting...");

    let config = Config::init_from_env().wrap_err("failed to load configuration from env")?;
    let processor_url = config
        .processor_url()
        .wrap_err("invalid processor host or port")?;

    tracing::info!("consumer configuration:");
    tracing::info!("  bind: {}", config.bind());
    tracing::info!("  processor url: {}", processor_url);
    tracing::info!("  poll interval: {:?}", config.poll_interval.0);
    tracing::info!("  request timeout: {:?}", config.request_timeout.0);

    let upstream = UpstreamClient::new(
        processor_url,
        config.request_timeout.0,
        "pipeline-consumer",
    )
    .wrap_err("failed to build processor client")?;
    let fetcher = FetchClient::new(upstream);

    let recorder_handle = if config.export_prometheus {
        Some(setup_metrics_recorder().wrap_err("failed to install metrics recorder")?)
    } else {
        None
    };
    let app = handlers::app(fetcher.clone(), recorder_handle);

    let shutdown = CancellationToken::new();
    cancel_on_shutdown_signal(shutdown.clone());

    let poller = Poller::new(fetcher, config.startup_delay.0, config.poll_interval.0);
    let poller = tokio::spawn(poller.run(shutdown.clone()));
    tracing::info!(
        "background consumption running every {:?}",
        config.poll_interval.0
    );

    let served = serve(app, &config.bind(), shutdown.clone().cancelled_owned()).await;

    // The server only returns on shutdown or on failure: stop polling either way.
    shutdown.cancel();
    match poller.await {
        Ok(iterations) => tracing::info!("consumer stopped after {} polls", iterations),
        Err(e) => tracing::error!("consumer poller task failed: {}", e),
    }

    served.wrap_err("failed to start consumer http server")
}
