//! Medilink web front-end entry point
//!
//! The server build renders the Dioxus app and serves the same-origin `/api`
//! proxy from one Axum router. Uses `dioxus::serve()` for dx serve compatibility.

use medilink_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use dioxus::server::axum::middleware::{from_fn, from_fn_with_state};
    use tower_http::compression::CompressionLayer;

    use medilink_web::config::AppConfig;
    use medilink_web::handlers::{api_router, ApiState};
    use medilink_web::infrastructure::backend::install_backend;
    use medilink_web::middleware::{auth_redirect, locale_redirect};

    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Medilink web...");

    dioxus::serve(|| async move {
        let config = AppConfig::from_env()?;
        tracing::info!(
            backend = %config.backend_api_url,
            default_locale = %config.default_locale,
            "Configuration loaded"
        );

        let state = ApiState::from_config(&config)?;
        if !install_backend(state.backend.clone()) {
            tracing::warn!("Backend already installed; server functions keep the existing one");
        }

        // Layers run outermost-last: locale prefix first, then the auth guard
        let router = dioxus::server::router(App)
            .merge(api_router(state))
            .layer(from_fn(auth_redirect))
            .layer(from_fn_with_state(config.default_locale, locale_redirect))
            .layer(CompressionLayer::new());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Medilink web initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
