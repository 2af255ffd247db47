use reelguess::{config::Config, routes::build_router, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    // Default shows application info plus tower-http warnings; override with
    // RUST_LOG as usual
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelguess=info,tower_http=warn".into()),
        )
        .init();

    println!("🎬 ReelGuess game server starting...");

    // Load configuration (.env + environment); both API credentials are
    // required to do anything useful
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    // Create application state
    let state = AppState::new(&config);
    println!("🔗 Search clients and game registry initialized");

    // Build router with all routes
    let app = build_router(state);

    // Bind to address
    let addr = format!("0.0.0.0:{}", config.port);

    println!("🚀 Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("✅ Server listening on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");

    println!("👋 Shutting down game server...");
}
