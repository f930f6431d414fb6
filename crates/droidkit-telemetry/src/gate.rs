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

//! The process-wide debug log gate.

use crate::sink::{LogCrateSink, LogSink, Priority};
use crate::tag::make_tag;
use droidkit_core::ToolkitConfig;
use std::error::Error;
use std::fmt::{Display, Write};
use std::sync::{Arc, OnceLock};

static GLOBAL_GATE: OnceLock<LogGate> = OnceLock::new();

/// The settings fixed by the first successful [`LogGate::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateSettings {
    /// Whether messages are emitted.
    pub debug: bool,
    /// Prefix prepended to every tag. Empty when none was given.
    pub tag_prefix: String,
}

/// Gates log emission on a debug flag fixed once per process.
///
/// Until [`initialize`](Self::initialize) is called the gate is closed and
/// the prefix is empty. The first call fixes both; later calls are ignored.
#[derive(Debug)]
pub struct LogGate {
    settings: OnceLock<GateSettings>,
    sink: Arc<dyn LogSink>,
}

impl LogGate {
    /// Creates an uninitialized gate writing to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            settings: OnceLock::new(),
            sink,
        }
    }

    /// Returns the process-wide gate, which writes through the `log` facade.
    pub fn global() -> &'static LogGate {
        GLOBAL_GATE.get_or_init(|| LogGate::new(Arc::new(LogCrateSink)))
    }

    /// Fixes the debug flag and tag prefix.
    ///
    /// Only the first call takes effect, even when callers race; it returns
    /// `true`. Every later call returns `false` and changes nothing.
    pub fn initialize(&self, debug: bool, tag_prefix: Option<&str>) -> bool {
        let mut applied = false;
        self.settings.get_or_init(|| {
            applied = true;
            GateSettings {
                debug,
                tag_prefix: tag_prefix.unwrap_or_default().to_string(),
            }
        });
        if !applied {
            log::trace!("LogGate already initialized; ignoring new settings");
        }
        applied
    }

    /// Initializes the gate from the application configuration.
    pub fn initialize_from(&self, config: &ToolkitConfig) -> bool {
        self.initialize(config.debug, config.tag_prefix.as_deref())
    }

    /// Returns `true` once [`initialize`](Self::initialize) has been called.
    pub fn is_initialized(&self) -> bool {
        self.settings.get().is_some()
    }

    /// Returns `true` if messages are emitted.
    pub fn is_enabled(&self) -> bool {
        self.settings.get().is_some_and(|s| s.debug)
    }

    /// Returns the tag prefix, empty before initialization.
    pub fn tag_prefix(&self) -> &str {
        self.settings
            .get()
            .map(|s| s.tag_prefix.as_str())
            .unwrap_or_default()
    }

    /// Returns the fixed settings, if any.
    pub fn settings(&self) -> Option<&GateSettings> {
        self.settings.get()
    }

    /// Builds the final tag for `raw` using the stored prefix.
    pub fn make_tag(&self, raw: &str) -> String {
        make_tag(self.tag_prefix(), raw)
    }

    /// Concatenates `fragments` and writes them under `make_tag(tag)`.
    ///
    /// Nothing is formatted while the gate is closed.
    pub fn emit(&self, priority: Priority, tag: &str, fragments: &[&dyn Display]) {
        if !self.is_enabled() {
            return;
        }
        let message = concat(fragments);
        self.sink.write(priority, &self.make_tag(tag), &message);
    }

    /// Like [`emit`](Self::emit), appending `error` and its chain of sources.
    pub fn emit_with_error(
        &self,
        priority: Priority,
        tag: &str,
        error: &(dyn Error + 'static),
        fragments: &[&dyn Display],
    ) {
        if !self.is_enabled() {
            return;
        }
        let mut message = concat(fragments);
        if !message.is_empty() {
            message.push('\n');
        }
        let _ = write!(message, "{error}");
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(message, "\nCaused by: {cause}");
            source = cause.source();
        }
        self.sink.write(priority, &self.make_tag(tag), &message);
    }

    /// Emits at [`Priority::Verbose`].
    pub fn v(&self, tag: &str, fragments: &[&dyn Display]) {
        self.emit(Priority::Verbose, tag, fragments);
    }

    /// Emits at [`Priority::Debug`].
    pub fn d(&self, tag: &str, fragments: &[&dyn Display]) {
        self.emit(Priority::Debug, tag, fragments);
    }

    /// Emits at [`Priority::Info`].
    pub fn i(&self, tag: &str, fragments: &[&dyn Display]) {
        self.emit(Priority::Info, tag, fragments);
    }

    /// Emits at [`Priority::Warn`].
    pub fn w(&self, tag: &str, fragments: &[&dyn Display]) {
        self.emit(Priority::Warn, tag, fragments);
    }

    /// Emits at [`Priority::Error`].
    pub fn e(&self, tag: &str, fragments: &[&dyn Display]) {
        self.emit(Priority::Error, tag, fragments);
    }
}

fn concat(fragments: &[&dyn Display]) -> String {
    match fragments {
        [single] => single.to_string(),
        _ => {
            let mut message = String::new();
            for fragment in fragments {
                let _ = write!(message, "{fragment}");
            }
            message
        }
    }
}
