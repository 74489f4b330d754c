use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Writes log lines to the browser console, dropping anything below `min_level`
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// Level picked from the build profile
    pub fn for_build() -> Self {
        Self::new(LogLevel::for_build())
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let line = entry.format_line();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

/// Wall clock from `Date.now()`, formatted as UTC `HH:MM:SS.mmm`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let millis_of_day = timestamp % 86_400_000;
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            millis_of_day / 3_600_000,
            (millis_of_day / 60_000) % 60,
            (millis_of_day / 1_000) % 60,
            millis_of_day % 1_000
        )
    }
}
