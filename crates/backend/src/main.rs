pub mod shared;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use shared::catalog_check::report_catalog;
use shared::config::{load_config, Config};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs method, path, status and elapsed time of every request
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_success() || status.is_redirection() {
        tracing::info!("{} {} {} {}ms", status.as_u16(), method, path, elapsed);
    } else {
        tracing::warn!("{} {} {} {}ms", status.as_u16(), method, path, elapsed);
    }
    response
}

fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("host.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn app(config: &Config) -> Router {
    let dist = Config::resolve(&config.assets.dist_dir);
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(dist).append_index_html_on_directories(true))
        .layer(middleware::from_fn(request_logger))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = load_config()?;
    report_catalog(&Config::resolve(&config.assets.catalog_file));

    let addr = config.bind_addr()?;
    tracing::info!("Serving {} on http://{}", config.assets.dist_dir, addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app(&config)).await?;
    Ok(())
}
