//! Board Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and echoes each line to the browser console (or stderr when not
//! running in a browser).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Default number of lines retained by [`LogBuffer`]
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Bounded, shareable ring of formatted log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the retained lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // A panic while holding the lock leaves the deque intact
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Layer that formats events into a [`LogBuffer`]
pub struct BufferLayer {
    buffer: LogBuffer,
    echo: bool,
}

impl BufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, echo: true }
    }

    /// Disable console/stderr output (buffer only)
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }
}

impl<S: Subscriber> Layer<S> for BufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {:>5} {}: {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields,
        );

        if self.echo {
            echo(*meta.level(), &line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn echo(level: Level, line: &str) {
    use web_sys::console;
    match level {
        Level::ERROR => console::error_1(&line.into()),
        Level::WARN => console::warn_1(&line.into()),
        _ => console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the buffer layer as the global subscriber
///
/// `level` is any of `trace`, `debug`, `info`, `warn`, `error` or `off`.
/// Returns the buffer so callers can inspect recent lines.
pub fn init(capacity: usize, level: &str) -> Result<LogBuffer, LoggerError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| LoggerError::InvalidLevel(level.to_string()))?;
    let buffer = LogBuffer::new(capacity);

    tracing_subscriber::registry()
        .with(filter)
        .with(BufferLayer::new(buffer.clone()))
        .try_init()?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.snapshot(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = LogBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push("x".to_string());
        buffer.push("y".to_string());
        assert_eq!(buffer.snapshot(), vec!["y".to_string()]);
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new(8);
        let subscriber = tracing_subscriber::registry().with(BufferLayer::new(buffer.clone()).quiet());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(seats = 3, "booking rejected");
        });

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("booking rejected"));
        assert!(lines[0].contains("seats=3"));
    }

    #[test]
    fn test_clear() {
        let buffer = LogBuffer::default();
        buffer.push("line".to_string());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_init_returns_shared_buffer() {
        let buffer = init(16, "info").unwrap();
        tracing::info!(guests = 4, "reservation booked");
        tracing::debug!("filtered out");

        let lines = buffer.snapshot();
        assert!(lines.iter().any(|l| l.contains("reservation booked") && l.contains("guests=4")));
        assert!(!lines.iter().any(|l| l.contains("filtered out")));
    }

    #[test]
    fn test_init_rejects_unknown_level() {
        let err = init(4, "loud").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(ref l) if l == "loud"));
    }
}
