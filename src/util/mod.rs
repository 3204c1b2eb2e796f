//! Utility modules for trace-injector

pub mod logging;

pub use logging::{init_logging, parse_level, LoggingConfig};
