use envconfig::Envconfig;
use eyre::{Result, WrapErr};
use tokio_util::sync::CancellationToken;

use pipeline_common::logging::setup_tracing;
use pipeline_common::metrics::{serve, setup_metrics_recorder};
use pipeline_common::shutdown::cancel_on_shutdown_signal;
use pipeline_common::upstream::UpstreamClient;
use pipeline_processor::config::Config;
use pipeline_processor::handlers;

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    tracing::info!("processor starting...");

    let config = Config::init_from_env().wrap_err("failed to load configuration from env")?;
    let producer_url = config
        .producer_url()
        .wrap_err("invalid producer host or port")?;

    tracing::info!("processor configuration:");
    tracing::info!("  bind: {}", config.bind());
    tracing::info!("  producer url: {}", producer_url);
    tracing::info!("  request timeout: {:?}", config.request_timeout.0);

    let producer = UpstreamClient::new(
        producer_url,
        config.request_timeout.0,
        "pipeline-processor",
    )
    .wrap_err("failed to build producer client")?;

    let recorder_handle = if config.export_prometheus {
        Some(setup_metrics_recorder().wrap_err("failed to install metrics recorder")?)
    } else {
        None
    };
    let app = handlers::app(producer, recorder_handle);

    let shutdown = CancellationToken::new();
    cancel_on_shutdown_signal(shutdown.clone());

    serve(app, &config.bind(), shutdown.cancelled_owned())
        .await
        .wrap_err("failed to start processor http server")?;

    Ok(())
}
