//! BlueLink Controller Dashboard
//!
//! Serves the Dioxus web UI and forwards the dashboard's API calls to the
//! BlueLink backend configured in `config`. All device and mapping data
//! lives upstream; this process only renders and relays.

fn main() {
    #[cfg(feature = "server")]
    {
        server_main();
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(bluelink_dashboard::app::App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn server_main() {
    if let Err(err) = run_server().await {
        tracing::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(feature = "server")]
async fn run_server() -> anyhow::Result<()> {
    use bluelink_dashboard::{app, config, proxy};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "bluelink_dashboard=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BlueLink Controller Dashboard");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let upstream = proxy::UpstreamState::new(config.upstream.base_url.clone())?;

    // UI + forwarded API routes
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), app::App)
        .merge(proxy::api_router(upstream))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
