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

//! Errors raised by loopers and toasts.

use std::io;

/// An error related to looper threads.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The looper thread could not be started.
    #[error("failed to spawn looper thread: {0}")]
    Spawn(#[source] io::Error),
    /// The looper has quit and no longer accepts tasks.
    #[error("looper '{0}' has quit")]
    LooperGone(String),
}
