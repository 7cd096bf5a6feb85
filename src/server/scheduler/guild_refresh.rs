use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    discord::GuildApi, error::AppError, model::role_table::RoleTable,
    service::refresh::GuildRefreshService,
};

/// Starts the guild refresh scheduler
///
/// Every tick of `schedule` refreshes the role snapshot and scanned accounts
/// of every registered guild. A tick that fires while the previous refresh is
/// still running is skipped.
///
/// # Arguments
/// - `schedule`: Six-field cron expression
/// - `db`: Database connection
/// - `api`: Guild API client
/// - `role_table`: Role ranks stored on each assignment
///
/// # Returns
/// The running scheduler, which must be kept alive for jobs to fire.
pub async fn start_scheduler(
    schedule: &str,
    db: DatabaseConnection,
    api: Arc<dyn GuildApi>,
    role_table: Arc<RoleTable>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let running = Arc::new(Mutex::new(()));

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let api = api.clone();
        let role_table = role_table.clone();
        let running = running.clone();

        Box::pin(async move {
            refresh_if_idle(&running, &db, api.as_ref(), &role_table).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Guild refresh scheduler started with schedule '{}'", schedule);

    Ok(scheduler)
}

/// Runs a refresh pass unless one is already holding `running`.
///
/// Returns `false` when the tick was skipped.
pub async fn refresh_if_idle(
    running: &Mutex<()>,
    db: &DatabaseConnection,
    api: &dyn GuildApi,
    role_table: &RoleTable,
) -> bool {
    let Ok(_guard) = running.try_lock() else {
        tracing::warn!("Previous guild refresh still running, skipping this tick");
        return false;
    };
    refresh_guilds(db, api, role_table).await;

    true
}

/// Runs one refresh pass, logging its outcome.
pub async fn refresh_guilds(db: &DatabaseConnection, api: &dyn GuildApi, role_table: &RoleTable) {
    tracing::info!("Refreshing guild roles and accounts");

    match GuildRefreshService::new(db, api, role_table)
        .refresh_all()
        .await
    {
        Ok(summary) => tracing::info!(
            "Guild refresh finished: {} refreshed, {} failed",
            summary.guilds_refreshed,
            summary.guilds_failed
        ),
        Err(e) => tracing::error!("Guild refresh failed: {}", e),
    }
}
