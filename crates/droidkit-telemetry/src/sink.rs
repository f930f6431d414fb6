// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Destinations for gated log output.

use std::fmt::Debug;
use std::sync::Mutex;

/// The priority of a log message, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Verbose output.
    Verbose,
    /// Debug output.
    Debug,
    /// Informational output.
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl Priority {
    /// Maps this priority onto the `log` facade's levels.
    pub fn as_log_level(self) -> log::Level {
        match self {
            Priority::Verbose => log::Level::Trace,
            Priority::Debug => log::Level::Debug,
            Priority::Info => log::Level::Info,
            Priority::Warn => log::Level::Warn,
            Priority::Error => log::Level::Error,
        }
    }

    /// Maps this priority onto `tracing`'s levels.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            Priority::Verbose => tracing::Level::TRACE,
            Priority::Debug => tracing::Level::DEBUG,
            Priority::Info => tracing::Level::INFO,
            Priority::Warn => tracing::Level::WARN,
            Priority::Error => tracing::Level::ERROR,
        }
    }
}

/// Receives fully formatted log messages.
pub trait LogSink: Send + Sync + Debug + 'static {
    /// Writes one message under `tag`.
    fn write(&self, priority: Priority, tag: &str, message: &str);
}

/// Forwards messages to the `log` facade, using the tag as the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        log::log!(target: tag, priority.as_log_level(), "{message}");
    }
}

/// Forwards messages to `tracing` as events carrying the tag as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        // `tracing::event!` needs a constant level.
        match priority {
            Priority::Verbose => tracing::trace!(tag, "{message}"),
            Priority::Debug => tracing::debug!(tag, "{message}"),
            Priority::Info => tracing::info!(tag, "{message}"),
            Priority::Warn => tracing::warn!(tag, "{message}"),
            Priority::Error => tracing::error!(tag, "{message}"),
        }
    }
}

/// A message captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The message priority.
    pub priority: Priority,
    /// The final tag.
    pub tag: String,
    /// The formatted message.
    pub message: String,
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Returns the number of captured records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every captured record.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        self.lock().push(LogRecord {
            priority,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
