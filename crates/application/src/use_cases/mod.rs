pub mod retention;

pub use retention::SweepOldRecordsUseCase;
