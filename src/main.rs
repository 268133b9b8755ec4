use civitrack::logging::init_tracing;
use civitrack::router::init_router;
use civitrack::state::init_app_state;
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let addr = format!("{}:{}", state.server_config.host, state.server_config.port);
    let production = state.server_config.production;

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, production, "CiviTrack API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
