use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::rate_limit::ModActionLimiter};

/// Every day at 00:00 UTC.
const CLEANUP_SCHEDULE: &str = "0 0 0 * * *";

/// Starts the daily mod-action counter cleanup.
///
/// Counters already reset on their own when the date rolls over; this job only drops
/// stale entries so the maps don't grow without bound.
///
/// # Arguments
/// - `limiter`: Limiter shared with the command handlers
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the job to fire
/// - `Err(AppError::SchedulerErr)` - Failed to create, register or start the job
pub async fn start_scheduler(limiter: ModActionLimiter) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let limiter = limiter.clone();

        Box::pin(async move {
            limiter.cleanup().await;
            tracing::info!("Cleaned up mod action counters");
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rate limit cleanup scheduler started");

    Ok(scheduler)
}
