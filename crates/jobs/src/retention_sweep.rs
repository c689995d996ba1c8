use chrono::Utc;
use guesswin_application::use_cases::SweepOldRecordsUseCase;
use guesswin_domain::{SweepReport, SweepSchedule};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Background job that fires the retention sweep on a cron schedule.
///
/// The next fire time is always derived from the wall clock, and every cycle
/// computes its own cutoff, so a late or skipped fire only delays cleanup.
/// The cycle deadline is enforced by the use case, which always hands back
/// a complete report.
pub struct RetentionSweepJob {
    sweep: Arc<SweepOldRecordsUseCase>,
    schedule: SweepSchedule,
    run_on_start: bool,
    shutdown: CancellationToken,
}

impl RetentionSweepJob {
    pub fn new(sweep: Arc<SweepOldRecordsUseCase>, schedule: SweepSchedule) -> Self {
        Self {
            sweep,
            schedule,
            run_on_start: false,
            shutdown: CancellationToken::new(),
        }
    }

    /// Sweep once immediately, before waiting for the first scheduled fire.
    pub fn with_run_on_start(mut self, run_on_start: bool) -> Self {
        self.run_on_start = run_on_start;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run_cycle(&self) -> SweepReport {
        let report = self.sweep.execute().await;
        if report.failed_collections() > 0 {
            warn!(
                failed = report.failed_collections(),
                "Retention sweep finished with failed collections"
            );
        }
        report
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            schedule = self.schedule.expression(),
            timezone = %self.schedule.timezone(),
            "Starting retention sweep job"
        );

        tokio::spawn(async move {
            if self.run_on_start && !self.shutdown.is_cancelled() {
                self.run_cycle().await;
            }

            loop {
                let now = Utc::now();
                let Some(next) = self.schedule.next_after(now) else {
                    warn!("Retention schedule has no upcoming fire time; stopping");
                    break;
                };
                let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
                info!(next_run = %next, "Next retention sweep scheduled");

                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RetentionSweepJob: shutting down");
                        break;
                    }
                    _ = tokio::time::sleep(wait) => {
                        self.run_cycle().await;
                    }
                }
            }
        })
    }
}
