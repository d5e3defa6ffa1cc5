//! Shared logging configuration: default level, per-name overrides, and
//! global context
//!
//! A `Config` is a cheap-to-clone handle; loggers hold one explicitly
//! instead of resolving against process-global state.

use parking_lot::RwLock;
use std::sync::Arc;

use super::context::ContextChain;
use super::level::Level;
use super::logger::Logger;
use super::sink::{shared_sink, SharedSink};
use crate::sinks::ConsoleSink;

/// A rule pinning one exact logger name to a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOverride {
    pub name: String,
    pub level: Level,
}

struct ConfigInner {
    default_level: Level,
    sink: SharedSink,
    overrides: RwLock<Vec<LevelOverride>>,
    context: RwLock<ContextChain>,
}

/// Process-wide logging configuration, passed to loggers by handle.
///
/// Cloning a `Config` clones the handle, not the state: every clone sees
/// the same overrides, global context, and default sink.
///
/// # Example
///
/// ```
/// use kvlog::{Config, Level};
///
/// let config = Config::new(Level::Debug);
/// config.set_level("noisy.lib", Level::Silent);
/// config.add_context("service", "api");
///
/// let logger = config.logger("app");
/// logger.info("ready", &[]).unwrap();
/// ```
#[derive(Clone)]
pub struct Config {
    inner: Arc<ConfigInner>,
}

impl Config {
    /// Create a configuration with empty overrides and context, writing to
    /// standard output by default.
    pub fn new(default_level: Level) -> Self {
        Self {
            inner: Arc::new(ConfigInner {
                default_level,
                sink: shared_sink(ConsoleSink::stdout()),
                overrides: RwLock::new(Vec::new()),
                context: RwLock::new(ContextChain::new()),
            }),
        }
    }

    /// Create a configuration with a specific default sink.
    pub fn with_sink(default_level: Level, sink: SharedSink) -> Self {
        Self {
            inner: Arc::new(ConfigInner {
                default_level,
                sink,
                overrides: RwLock::new(Vec::new()),
                context: RwLock::new(ContextChain::new()),
            }),
        }
    }

    pub fn default_level(&self) -> Level {
        self.inner.default_level
    }

    /// Handle to the configuration's default sink. Loggers created through
    /// [`Config::logger`] share it.
    pub fn sink(&self) -> SharedSink {
        Arc::clone(&self.inner.sink)
    }

    /// Register a level override for an exact logger name.
    ///
    /// The most recently registered override for a name wins. Loggers that
    /// have already resolved their level are not affected.
    pub fn set_level(&self, name: impl Into<String>, level: Level) {
        self.inner.overrides.write().push(LevelOverride {
            name: name.into(),
            level,
        });
    }

    /// Append a fixed-value field to the global context. Global context is
    /// read fresh on every emit, never cached by loggers.
    pub fn add_context(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.context.write().add(key, value);
    }

    /// Append a computed field to the global context.
    pub fn add_dynamic_context(
        &self,
        key: impl Into<String>,
        provider: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) {
        self.inner.context.write().add_dynamic(key, provider);
    }

    /// Effective level for `name`: the latest exact-name override, else
    /// the default. Matching is exact string equality; dotted names get no
    /// prefix or hierarchy semantics.
    pub fn resolve_level(&self, name: &str) -> Level {
        self.inner
            .overrides
            .read()
            .iter()
            .rev()
            .find(|o| o.name == name)
            .map(|o| o.level)
            .unwrap_or(self.inner.default_level)
    }

    /// Create a logger bound to this configuration, sharing its sink.
    pub fn logger(&self, name: impl Into<String>) -> Logger {
        Logger::bound(name, self.clone())
    }

    /// Run `f` against the global context chain.
    pub(crate) fn with_context<R>(&self, f: impl FnOnce(&ContextChain) -> R) -> R {
        f(&self.inner.context.read())
    }
}
