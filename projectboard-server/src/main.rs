use anyhow::Context;
use clap::Parser;
use projectboard_config::ConfigProvider;
use projectboard_server::cli::Cli;
use projectboard_server::logging::configure_logging;
use projectboard_server::{build_state, serve, shutdown_signal};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let mut config = ConfigProvider::new()
        .load(cli.config.as_deref())
        .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let state = build_state(&config).await.with_context(|| {
        format!(
            "failed to open board database {}",
            config.database.path.display()
        )
    })?;

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    serve(listener, state, shutdown_signal()).await?;
    Ok(())
}
