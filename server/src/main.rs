//! Gateway binary entry point: parses CLI args, initializes tracing, loads
//! configured models, and serves the HTTP surface until shutdown.

use clap::Parser;

use tabagent_server::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    tabagent_server::init_tracing(&args.log_level);

    tracing::info!(host = %args.host, port = args.port, "starting gateway");
    tabagent_server::run(args).await
}
