pub mod database;
pub mod errors;
pub mod logging;
pub mod retention;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use retention::RetentionConfig;
pub use root::{CliOverrides, Config};
