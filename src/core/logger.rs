//! Named log emitters

use parking_lot::RwLock;

use super::config::Config;
use super::context::{with_scoped, ContextChain};
use super::error::{LogError, Result};
use super::level::Level;
use super::record::{assemble, render, DEFAULT_RECORD_CAPACITY};
use super::sink::{shared_sink, SharedSink};
use crate::sinks::ConsoleSink;

/// Outcome of an emit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Gated out by level; nothing was evaluated, allocated, or written.
    Suppressed,
    /// A line reached the sink and was flushed; `truncated` reports that
    /// trailing items were dropped to fit the record capacity.
    Written { truncated: bool },
}

/// A named emitter with a lazily resolved level, its own context chain,
/// and its own output sink.
///
/// The level is resolved against the bound configuration on the first
/// emit and memoized; later override changes do not affect it. The sink
/// defaults to standard output and is independent of the configuration's
/// sink, except that [`Config::logger`] hands the new logger the
/// configuration's sink handle at creation time.
///
/// # Example
///
/// ```
/// use kvlog::{Config, Level};
///
/// let config = Config::new(Level::Debug);
/// let mut logger = config.logger("app");
/// logger.add_context("request_id", "a925");
///
/// logger.info("hello", &[("arg", "value")]).unwrap();
/// ```
pub struct Logger {
    name: String,
    config: Option<Config>,
    level: RwLock<Level>,
    sink: SharedSink,
    context: ContextChain,
    record_capacity: usize,
}

impl Logger {
    /// Create an unbound logger writing to standard output. It cannot
    /// emit until [`Logger::bind`] attaches a configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
            level: RwLock::new(Level::Unset),
            sink: shared_sink(ConsoleSink::stdout()),
            context: ContextChain::new(),
            record_capacity: DEFAULT_RECORD_CAPACITY,
        }
    }

    pub(crate) fn bound(name: impl Into<String>, config: Config) -> Self {
        let sink = config.sink();
        Self {
            name: name.into(),
            config: Some(config),
            level: RwLock::new(Level::Unset),
            sink,
            context: ContextChain::new(),
            record_capacity: DEFAULT_RECORD_CAPACITY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The memoized level; `Unset` until the first emit resolves it.
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Attach a configuration handle. A level that already resolved away
    /// from `Unset` is kept.
    pub fn bind(&mut self, config: &Config) {
        self.config = Some(config.clone());
    }

    /// Replace this logger's sink. The configuration's sink is unaffected.
    pub fn set_sink(&mut self, sink: SharedSink) {
        self.sink = sink;
    }

    /// Cap in bytes for a rendered line, including its newline.
    pub fn set_record_capacity(&mut self, capacity: usize) {
        self.record_capacity = capacity;
    }

    pub fn record_capacity(&self) -> usize {
        self.record_capacity
    }

    /// Append a fixed-value field to this logger's own context.
    pub fn add_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.add(key, value);
    }

    /// Append a computed field to this logger's own context.
    pub fn add_dynamic_context(
        &mut self,
        key: impl Into<String>,
        provider: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) {
        self.context.add_dynamic(key, provider);
    }

    fn effective_level(&self) -> Result<Level> {
        let current = *self.level.read();
        if current != Level::Unset {
            return Ok(current);
        }
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| LogError::unbound(&self.name))?;
        let resolved = config.resolve_level(&self.name);
        *self.level.write() = resolved;
        Ok(resolved)
    }

    /// Emit one record: resolve the level if needed, gate, assemble the
    /// merged item list, render, then write and flush the line.
    ///
    /// Fields print after the message, in call order. A gated call returns
    /// [`Emit::Suppressed`] without evaluating providers or touching the
    /// sink. Sentinel levels passed as `level` are suppressed as well.
    pub fn log(&self, level: Level, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        let effective = self.effective_level()?;
        if !level.is_severity() || level < effective {
            return Ok(Emit::Suppressed);
        }

        let config = self
            .config
            .as_ref()
            .ok_or_else(|| LogError::unbound(&self.name))?;

        config.with_context(|global| {
            with_scoped(|scoped| {
                let items = assemble(global, scoped, &self.context, message, fields);
                let rendered = render(&items, self.record_capacity);

                let mut sink = self.sink.lock();
                sink.write_line(&rendered.line)?;
                sink.flush()?;
                Ok(Emit::Written {
                    truncated: rendered.truncated,
                })
            })
        })
    }

    #[inline]
    pub fn debug(&self, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        self.log(Level::Debug, message, fields)
    }

    #[inline]
    pub fn info(&self, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        self.log(Level::Info, message, fields)
    }

    #[inline]
    pub fn warning(&self, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        self.log(Level::Warning, message, fields)
    }

    #[inline]
    pub fn error(&self, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        self.log(Level::Error, message, fields)
    }

    #[inline]
    pub fn critical(&self, message: &str, fields: &[(&str, &str)]) -> Result<Emit> {
        self.log(Level::Critical, message, fields)
    }
}
