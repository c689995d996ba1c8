use super::Repositories;
use guesswin_application::use_cases::SweepOldRecordsUseCase;
use guesswin_domain::Config;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub sweep_old_records: Arc<SweepOldRecordsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> anyhow::Result<Self> {
        let schedule = config.sweep_schedule()?;
        let retention = &config.retention;

        Ok(Self {
            sweep_old_records: Arc::new(
                SweepOldRecordsUseCase::new(repos.documents.clone())
                    .with_collections(retention.collections.clone())
                    .with_timezone(schedule.timezone())
                    .with_operation_timeout(Duration::from_secs(retention.operation_timeout_secs))
                    .with_cycle_timeout(Duration::from_secs(retention.cycle_timeout_secs)),
            ),
        })
    }
}
