use emote_api::{AppState, app, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let state = AppState::new(&config);
    let router = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health               - Health check");
    info!("  POST   /auth/signup          - Create account");
    info!("  POST   /auth/login           - Login");
    info!("  GET    /users/me             - Current account (auth)");
    info!("  GET    /posts                - Feed with authors");
    info!("  POST   /posts                - Create post (auth, emoji only)");
    info!("  GET    /users/{{id}}/posts     - Posts by one author");
    info!("  GET    /profiles/{{slug}}      - Public profile by @username");

    axum::serve(listener, router).await.expect("Server error");
}
