//! Logging macros for ergonomic emit calls.
//!
//! These macros fix the severity and collect `key => value` field pairs
//! into the typed slice the logger expects.
//!
//! # Examples
//!
//! ```
//! use kvlog::prelude::*;
//! use kvlog::info;
//!
//! let config = Config::new(Level::Debug);
//! let logger = config.logger("app");
//!
//! // Basic logging
//! info!(logger, "server started").unwrap();
//!
//! // With fields
//! info!(logger, "request accepted", "path" => "/health", "peer" => "10.0.0.7").unwrap();
//! ```

/// Emit a record at an explicit level.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let config = Config::new(Level::Debug);
/// # let logger = config.logger("app");
/// use kvlog::log;
/// log!(logger, Level::Info, "plain message").unwrap();
/// log!(logger, Level::Error, "lookup failed", "code" => "500").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.log($level, $msg, &[$(($key, $value)),*])
    };
}

/// Emit a debug-level record.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $msg $(, $key => $value)*)
    };
}

/// Emit an info-level record.
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $msg $(, $key => $value)*)
    };
}

/// Emit a warning-level record.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $msg $(, $key => $value)*)
    };
}

/// Emit an error-level record.
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $msg $(, $key => $value)*)
    };
}

/// Emit a critical-level record.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Critical, $msg $(, $key => $value)*)
    };
}
