//! Sink trait for log output destinations

use parking_lot::Mutex;
use std::sync::Arc;

use super::error::Result;

/// A byte-oriented destination for complete log lines.
///
/// Implementations receive whole newline-terminated lines and must make
/// them durable on `flush`. The emit path flushes after every record.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink handle that a configuration and its loggers can share.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap a sink for sharing between a configuration and its loggers.
pub fn shared_sink<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
