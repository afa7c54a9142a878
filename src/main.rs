use std::net::SocketAddr;
use std::sync::Arc;

use soccer_content_search::{api, database, external, services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize database
    let database = database::Database::new().await?;

    // Initialize activity display conversion
    let converter = Arc::new(services::ActivityConverter::new(
        database.repository().clone(),
    ));

    // Initialize YouTube ingest
    let youtube = external::YoutubeClient::from_env();
    if !youtube.is_available() {
        tracing::warn!("YOUTUBE_API_KEY not set, channel ingest is disabled");
    }
    let ingest = Arc::new(services::IngestService::new(
        youtube,
        database.repository().clone(),
    ));

    // Build our application with routes
    let app = api::router(api::AppState {
        database,
        converter,
        ingest,
    });

    // Run the server - 从环境变量读取配置
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
