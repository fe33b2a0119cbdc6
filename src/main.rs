use portfolio_site::configuration::get_configuration;
use portfolio_site::startup::Application;
use portfolio_site::telemetry::get_subscriber;
use portfolio_site::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main] // requires tokio features: macros, rt-multi-thread
async fn main() -> Result<(), anyhow::Error> {
    // RUST_LOG default is "error"; only logs at the specified level and higher
    // are emitted
    let subscriber = get_subscriber("portfolio-site", "info", std::io::stdout);
    init_subscriber(subscriber);

    // 127.0.0.1 only accepts requests originating from the same machine; the
    // prod host (0.0.0.0) is set in configuration/production.yaml
    let cfg = get_configuration()?;

    Application::build(cfg).await?.run_until_stopped().await?;

    Ok(())
}
