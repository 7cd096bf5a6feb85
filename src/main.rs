mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    discord::{commands, GuildApi, SerenityGuildApi},
    error::AppError,
    middleware::signature::SignatureVerifier,
    router, scheduler, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fc_whitelist=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let verifier = SignatureVerifier::from_hex(&config.discord_public_key)?;
    let role_table = Arc::new(startup::load_role_table(&config).await?);
    let db = startup::connect_to_database(&config).await?;

    let discord_http = startup::setup_discord_http(&config);
    if config.register_commands {
        if let Err(e) = commands::register_global_commands(&discord_http).await {
            tracing::error!("Failed to register slash commands: {}", e);
        }
    }
    let discord: Arc<dyn GuildApi> = Arc::new(SerenityGuildApi::new(discord_http));

    let _scheduler = scheduler::guild_refresh::start_scheduler(
        &config.refresh_schedule,
        db.clone(),
        discord.clone(),
        role_table.clone(),
    )
    .await?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            discord,
            verifier,
            role_table,
            config.discord_application_id,
        ))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
