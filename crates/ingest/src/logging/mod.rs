pub mod logger;
pub use logger::{LogGuard, LoggingConfig, LoggingError, init_with_config};
