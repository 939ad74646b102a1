use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activities::modules::activities::core::seed::mergington_roster;
use activities::shell::config::AppConfig;
use activities::shell::graphql::GRAPHQL_PATH;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let store = Arc::new(InMemoryActivityStore::new(mergington_roster()));
    let state = AppState::in_memory(store);
    let app = router(state, &config.static_dir);

    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
