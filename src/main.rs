use std::{process::ExitCode, sync::Arc, time::Duration};

use clap::Parser;
use post_probe::{
    cli_arguments::CliArguments, http_client::reqwest_http_client::ReqwestHttpClient,
    post_sender::PostSender,
};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let client = match ReqwestHttpClient::with_timeout(Duration::from_secs(args.timeout_secs)) {
        Ok(client) => client,
        Err(err) => {
            error!("Building the HTTP client failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let sender = PostSender::new(Arc::new(client), args.url.clone())
        .require_success(args.require_success);

    info!("Probing {}", sender.url());

    match sender.run(&args.encoding.encodings()).await {
        Ok(responses) => {
            info!("{} POST requests sent to {}", responses.len(), sender.url());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}
