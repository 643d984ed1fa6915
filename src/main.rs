use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use marketlens_backend::auth::TokenService;
use marketlens_backend::config::AppConfig;
use marketlens_backend::logging::{self, LoggingConfig};
use marketlens_backend::services::analysis_service::AnalysisGenerator;
use marketlens_backend::state::AppState;
use marketlens_backend::store::{InMemoryUserStore, StockStore};
use marketlens_backend::app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env()?;

    let state = AppState {
        users: Arc::new(InMemoryUserStore::new()),
        stocks: Arc::new(StockStore::seeded()),
        tokens: TokenService::new(&config.jwt_secret, config.token_ttl),
        analysis: AnalysisGenerator::new(),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Marketlens backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
