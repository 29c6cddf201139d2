use clap::Parser;
use keyscope_application::services::LatestSample;
use keyscope_domain::CliOverrides;
use keyscope_infrastructure::RedisStore;
use keyscope_jobs::{InfoSamplerJob, JobRunner};
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "keyscope")]
#[command(version)]
#[command(about = "Keyscope - Redis introspection and Drupal cache-key dashboard")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Store URL, e.g. redis://127.0.0.1:6379/0
    #[arg(short = 's', long)]
    store_url: Option<String>,

    /// Drupal cache-key prefix
    #[arg(short = 'p', long)]
    prefix: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        store_url: cli.store_url,
        prefix: cli.prefix,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Keyscope v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.or_else(keyscope_domain::Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration file loaded"),
        None => info!("No configuration file found, using defaults"),
    }
    info!(
        prefix = %config.drupal.prefix,
        scan_cap = config.drupal.scan_cap,
        "Drupal report settings"
    );

    let store = Arc::new(RedisStore::new(&config.store.url)?);
    let latest = LatestSample::new();
    let use_cases = di::UseCases::new(store, &config, latest.clone());

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.sampler.enabled {
        runner = runner.with_info_sampler(
            InfoSamplerJob::new(use_cases.summary.clone(), latest)
                .with_interval(config.sampler.interval_secs),
        );
    }
    runner.start().await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, use_cases.app_state(&config), shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
