//! Citizen-services backend entry point

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use janseva_config::{load_settings, Settings};
use janseva_llm::{ChatAdapter, TranslationAdapter};
use janseva_server::{create_router, AppState};
use janseva_speech::{HttpSttEngine, HttpTtsEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from files and environment.
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
    let env = std::env::var("JANSEVA_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting janseva server v{}", env!("CARGO_PKG_VERSION"));

    // Record store: connect, ensure schema, seed reference data
    let records = janseva_persistence::init(
        &settings.storage.database_url,
        settings.storage.seed_services,
    )
    .await?;

    // Adapters are constructed once; configured/unconfigured is decided here
    let chat = ChatAdapter::from_config(&settings.chat)?;
    let translator = TranslationAdapter::from_config(&settings.translation)?;
    let stt = HttpSttEngine::from_config(&settings.speech)?;
    let tts = HttpTtsEngine::from_config(&settings.speech)?;

    tracing::info!(
        chat_configured = chat.is_configured(),
        translation_configured = translator.is_configured(),
        "Adapters initialized"
    );

    tokio::fs::create_dir_all(&settings.media.tts_dir).await?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState::new(
        Arc::new(settings),
        records,
        Arc::new(chat),
        Arc::new(translator),
        Arc::new(stt),
        Arc::new(tts),
    );

    let app = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing with an env-filter and optional JSON output
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("janseva={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
