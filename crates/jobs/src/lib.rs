pub mod retention_sweep;
pub mod runner;

pub use retention_sweep::RetentionSweepJob;
pub use runner::JobRunner;
