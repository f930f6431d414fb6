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

//! # Droidkit Telemetry
//!
//! Debug logging that costs nothing once disabled. A [`LogGate`] is
//! initialized once with the application's debug flag and tag prefix; every
//! message passed through it afterwards is either dropped unformatted or
//! written to a [`LogSink`] under a prefixed tag.

#![warn(missing_docs)]

pub mod gate;
pub mod init;
pub mod sink;
pub mod tag;

pub use gate::{GateSettings, LogGate};
pub use init::{init_env_logger, init_from_config, init_tracing};
pub use sink::{LogCrateSink, LogRecord, LogSink, MemorySink, Priority, TracingSink};
pub use tag::{make_tag, tag_for, MAX_TAG_LENGTH};
