use envconfig::Envconfig;
use eyre::{Result, WrapErr};
use tokio_util::sync::CancellationToken;

use pipeline_common::logging::setup_tracing;
use pipeline_common::metrics::{serve, setup_metrics_recorder};
use pipeline_common::shutdown::cancel_on_shutdown_signal;
use pipeline_producer::config::Config;
use pipeline_producer::handlers::{self, data::RandomValues};

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    tracing::info!("producer starting...");

    let config = Config::init_from_env().wrap_err("failed to load configuration from env")?;
    tracing::info!("producer configuration: bind={}", config.bind());

    let recorder_handle = if config.export_prometheus {
        Some(setup_metrics_recorder().wrap_err("failed to install metrics recorder")?)
    } else {
        None
    };
    let app = handlers::app(RandomValues, recorder_handle);

    let shutdown = CancellationToken::new();
    cancel_on_shutdown_signal(shutdown.clone());

    serve(app, &config.bind(), shutdown.cancelled_owned())
        .await
        .wrap_err("failed to start producer http server")?;

    Ok(())
}
