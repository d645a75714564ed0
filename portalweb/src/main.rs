use std::{sync::Arc, thread, time::Duration};

use args::parse_args;
use config::PortalConfig;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod asset;
mod config;
mod gate;
mod routes;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);
    let config = PortalConfig::try_from(&args)?;
    if config.identity_header.is_none() {
        info!("No --identity-header given, /dashboard must be gated by the authentication backend");
    }

    let app = routes::router(Arc::new(config));

    // Port 0 binds to a random port.
    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}");

    if args.auto_open {
        let url = format!("http://{addr}{}", args.open_page.path());
        // Give axum a moment to start before opening the browser.
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            if let Err(err) = opener::open_browser(url) {
                warn!("Could not open browser: {err}");
            }
        });
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .init();
}

/// Waits for Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not install Ctrl+C handler: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
