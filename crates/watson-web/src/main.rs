//! Watson Web Server
//!
//! Run with: cargo run -p watson-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use watson_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    info!("Starting Watson {}...", env!("CARGO_PKG_VERSION"));
    info!(
        "Sherlock: {} {:?}, results in {}",
        config.sherlock.executable,
        config.sherlock.prefix_args,
        config.sherlock.results_dir.display()
    );

    tokio::fs::create_dir_all(&config.sherlock.results_dir).await?;

    let addr = config.bind_addr();
    let state = watson_web::state::AppState::new(config)?;
    let app = watson_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Open your browser and navigate to http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
