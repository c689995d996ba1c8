pub mod sweep_old_records;

pub use sweep_old_records::SweepOldRecordsUseCase;
