//! Layer-tagged logging behind a process-wide [`Logger`].
//!
//! The frame loop logs from hot paths, so the macros ask the logger whether a
//! level is wanted before formatting anything.

use derive_more::Display;
use std::cell::RefCell;
use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

impl LogLevel {
    /// Debug in development builds, Warn in release builds
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Warn }
    }
}

/// Layer that produced a log line, tagged with the emitting unit
#[derive(Debug, Clone, PartialEq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
        Self { timestamp: get_time_provider().current_timestamp(), level, component, message }
    }

    /// `[timestamp] LEVEL TAG: message`
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        )
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Whether entries at `level` would be kept. Checked before formatting.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn info(&self, component: LogComponent, message: &str) {
        if self.enabled(LogLevel::Info) {
            self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
        }
    }

    fn warn(&self, component: LogComponent, message: &str) {
        if self.enabled(LogLevel::Warn) {
            self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
        }
    }
}

/// Keeps entries in memory; for hosts without a console and for tests
pub struct MemoryLogger {
    min_level: LogLevel,
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level, entries: Mutex::new(Vec::new()) }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    pub fn count(&self, level: LogLevel, component: &LogComponent) -> usize {
        self.entries().iter().filter(|e| e.level == level && &e.component == component).count()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Lets a `&'static MemoryLogger` be installed while the caller keeps reading it
impl Logger for &'static MemoryLogger {
    fn log(&self, entry: LogEntry) {
        (**self).log(entry)
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the process logger. Returns `false` if one was already installed.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

/// Install the process time provider. Returns `false` if one was already installed.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) -> bool {
    GLOBAL_TIME_PROVIDER.set(time_provider).is_ok()
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&SequenceTimeProvider)
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<LogEntry>>> = const { RefCell::new(None) };
}

/// Run `f` and also collect the Warn and Error entries logged on this thread
/// while it runs. The installed logger still receives them.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<LogEntry>) {
    let outer = CAPTURED.with(|c| c.borrow_mut().replace(Vec::new()));
    let result = f();
    let captured = CAPTURED.with(|c| std::mem::replace(&mut *c.borrow_mut(), outer));
    (result, captured.unwrap_or_default())
}

#[doc(hidden)]
pub fn capturing(level: LogLevel) -> bool {
    level >= LogLevel::Warn && CAPTURED.with(|c| c.borrow().is_some())
}

#[doc(hidden)]
pub fn dispatch(logger: &dyn Logger, entry: LogEntry) {
    if capturing(entry.level) {
        CAPTURED.with(|c| {
            if let Some(captured) = c.borrow_mut().as_mut() {
                captured.push(entry.clone());
            }
        });
    }
    if logger.enabled(entry.level) {
        logger.log(entry);
    }
}

struct NoOpLogger;
impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Monotonic counter used until a real clock is installed
struct SequenceTimeProvider;
impl TimeProvider for SequenceTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $component:expr, $($arg:tt)*) => {{
        let logger = $crate::domain::logging::get_logger();
        if logger.enabled($level) || $crate::domain::logging::capturing($level) {
            let entry = $crate::domain::logging::LogEntry::new($level, $component, format!($($arg)*));
            $crate::domain::logging::dispatch(logger, entry);
        }
    }};
}

/// Trace, debug and info lines compile away in release builds
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__log_at!($crate::domain::logging::LogLevel::Trace, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__log_at!($crate::domain::logging::LogLevel::Debug, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::__log_at!($crate::domain::logging::LogLevel::Info, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::domain::logging::LogLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::__log_at!($crate::domain::logging::LogLevel::Error, $component, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_tags_render_layer_prefix() {
        assert_eq!(LogComponent::Domain("Trail").to_string(), "DOM:Trail");
        assert_eq!(LogComponent::Presentation("App").to_string(), "PRE:App");
        assert_eq!(LogLevel::Warn.to_string(), " WARN");
    }

    #[test]
    fn memory_logger_filters_below_its_level() {
        let logger = MemoryLogger::new(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Error));
        logger.info(LogComponent::Domain("Trail"), "dropped");
        logger.warn(LogComponent::Domain("Trail"), "kept");
        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn captured_warnings_are_scoped_to_the_closure() {
        let ((), outer) = capture_warnings(|| {
            crate::log_warn!(LogComponent::Domain("Trail"), "first {}", 1);
            let ((), inner) = capture_warnings(|| {
                crate::log_error!(LogComponent::Domain("Trail"), "nested");
            });
            assert_eq!(inner.len(), 1);
            assert_eq!(inner[0].level, LogLevel::Error);
        });
        assert_eq!(outer.len(), 1);
        assert_eq!(outer[0].message, "first 1");
        assert!(!capturing(LogLevel::Warn));
    }
}
