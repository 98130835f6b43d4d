mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();
    let router = Router::new().fallback_service(ServeDir::new(&cli.dist_dir));
    let addr = SocketAddr::new(cli.host, cli.port);
    tracing::info!("Serving {} on {}", cli.dist_dir.display(), addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let router = backend::init(router, cli.service_config());
    axum::serve(listener, router).await?;
    Ok(())
}
