use crate::services::session_cache::{SessionCache, SESSION_TTL_MINUTES, SWEEP_INTERVAL_SECONDS};
use chrono::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

/// Background task that periodically evicts expired session cache
/// entries. Shares the cache through the same synchronized handle as the
/// request handlers, so it can run while lookups are in flight.
pub struct SweeperService {
    cache: SessionCache,
    scheduler: JobScheduler,
}

impl SweeperService {
    pub async fn new(
        cache: SessionCache,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self { cache, scheduler })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let cache = self.cache.clone();

        let sweep_job = Job::new_repeated_async(
            std::time::Duration::from_secs(SWEEP_INTERVAL_SECONDS),
            move |_uuid, _l| {
                let cache = cache.clone();
                Box::pin(async move {
                    let removed = cache
                        .sweep_expired(Duration::minutes(SESSION_TTL_MINUTES))
                        .await;
                    if removed > 0 {
                        tracing::info!("Swept {} expired session cache entries", removed);
                    }
                })
            },
        )?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Cache sweeper started - evicting entries older than {} minutes every {} seconds",
            SESSION_TTL_MINUTES,
            SWEEP_INTERVAL_SECONDS
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn sweep_now(&self) -> usize {
        self.cache
            .sweep_expired(Duration::minutes(SESSION_TTL_MINUTES))
            .await
    }
}
