//! Core logging types and traits

pub mod config;
pub mod context;
pub mod error;
pub mod level;
pub mod logger;
pub mod providers;
pub mod record;
pub mod sink;

pub use config::{Config, LevelOverride};
pub use context::{
    clear_scoped_context, scoped_context, scoped_dynamic_context, ContextChain, ContextEntry,
    ContextValue, ScopedContextGuard, ValueProvider,
};
pub use error::{LogError, Result};
pub use level::Level;
pub use logger::{Emit, Logger};
pub use providers::{thread_name, timestamp, TimestampFormat};
pub use record::{assemble, render, Item, Rendered, DEFAULT_RECORD_CAPACITY};
pub use sink::{shared_sink, SharedSink, Sink};
