//! # kvlog
//!
//! A minimal structured logging library: named loggers emit `key=value`
//! lines gated by severity level, enriched with context fields inherited
//! from a shared configuration, from thread-local scoped context, and from
//! the logger itself.
//!
//! ## Features
//!
//! - **Deterministic field order**: global context, scoped context, logger
//!   context, message, call fields
//! - **Lazy level resolution**: per-name overrides resolved once per
//!   logger, exact-name match only
//! - **Bounded rendering**: whole-item truncation with a caller-visible
//!   flag, never a corrupted line
//! - **Verbatim output**: values are interpolated as-is, for human
//!   consumption rather than machine parsing
//!
//! ## Example
//!
//! ```
//! use kvlog::prelude::*;
//!
//! let config = Config::new(Level::Debug);
//! config.set_level("noisy.lib", Level::Silent);
//! config.add_context("service", "api");
//!
//! let mut logger = config.logger("app");
//! logger.add_context("request_id", "a925");
//!
//! logger.info("request accepted", &[("path", "/health")]).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        clear_scoped_context, scoped_context, scoped_dynamic_context, Config, ContextChain,
        Emit, Level, LevelOverride, LogError, Logger, Result, ScopedContextGuard, SharedSink,
        Sink, TimestampFormat, DEFAULT_RECORD_CAPACITY,
    };
    pub use crate::core::sink::shared_sink;
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use core::{
    assemble, clear_scoped_context, render, scoped_context, scoped_dynamic_context, shared_sink,
    Config, ContextChain, ContextEntry, ContextValue, Emit, Item, Level, LevelOverride, LogError,
    Logger, Rendered, Result, ScopedContextGuard, SharedSink, Sink, TimestampFormat,
    ValueProvider, DEFAULT_RECORD_CAPACITY,
};
pub use core::providers;
pub use sinks::{ConsoleSink, FileSink};
