use clap::Parser;
use guesswin_domain::{CliOverrides, SweepReport};
use guesswin_jobs::{JobRunner, RetentionSweepJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "guesswin-sweeper")]
#[command(version)]
#[command(about = "Guess and Win retention sweeper - prunes bets, funds requests and matches past the retention window")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Cron expression with seconds (e.g. "0 0 0 1 */2 *")
    #[arg(long)]
    schedule: Option<String>,

    /// IANA timezone for the schedule and the end-of-day cutoff
    #[arg(long)]
    timezone: Option<String>,

    /// Run a single sweep and exit
    #[arg(long)]
    once: bool,

    /// Report what a sweep would delete without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Sweep immediately on startup, then follow the schedule
    #[arg(long)]
    run_on_start: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        schedule: cli.schedule.clone(),
        timezone: cli.timezone.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Guess and Win sweeper v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos, &config)?;

    if cli.once || cli.dry_run {
        let sweep = &use_cases.sweep_old_records;
        let report = if cli.dry_run {
            sweep.preview().await
        } else {
            sweep.execute().await
        };

        print_report(&report)?;
        if report.failed_collections() > 0 {
            warn!(
                failed = report.failed_collections(),
                "Some collections could not be swept"
            );
        }
        return Ok(());
    }

    let job = RetentionSweepJob::new(use_cases.sweep_old_records.clone(), config.sweep_schedule()?)
        .with_run_on_start(cli.run_on_start);

    let shutdown = CancellationToken::new();
    let handles = JobRunner::new()
        .with_retention_sweep(job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job terminated abnormally");
        }
    }

    info!("Sweeper shutdown complete");
    Ok(())
}

fn print_report(report: &SweepReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
