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

//! Short transient messages.

use crate::error::UiError;
use crate::looper::{has_looper, LooperHandle};
use std::sync::Arc;
use std::time::Duration;

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastLength {
    /// About two seconds.
    #[default]
    Short,
    /// About three and a half seconds.
    Long,
}

impl ToastLength {
    /// Returns the display duration.
    pub fn duration(self) -> Duration {
        match self {
            ToastLength::Short => Duration::from_millis(2_000),
            ToastLength::Long => Duration::from_millis(3_500),
        }
    }
}

/// The content of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastText {
    /// Literal text.
    Message(String),
    /// A string resource id, resolved by the presenter.
    Resource(u32),
}

impl From<&str> for ToastText {
    fn from(text: &str) -> Self {
        ToastText::Message(text.to_string())
    }
}

impl From<String> for ToastText {
    fn from(text: String) -> Self {
        ToastText::Message(text)
    }
}

/// Puts a toast on screen. Always called from a looper thread.
pub trait ToastPresenter: Send + Sync + 'static {
    /// Presents `text` for `length`.
    fn present(&self, text: &ToastText, length: ToastLength);
}

/// Shows toasts from any thread.
///
/// A caller already running on a looper presents directly; any other caller
/// has the toast posted to the main looper.
#[derive(Clone)]
pub struct Toaster {
    presenter: Arc<dyn ToastPresenter>,
    main: LooperHandle,
}

impl Toaster {
    /// Creates a toaster presenting through `presenter`, falling back to `main`.
    pub fn new(presenter: Arc<dyn ToastPresenter>, main: LooperHandle) -> Self {
        Self { presenter, main }
    }

    /// Shows `text` for `length`.
    ///
    /// Fails only if the toast had to be posted and the main looper has quit.
    pub fn show(&self, text: impl Into<ToastText>, length: ToastLength) -> Result<(), UiError> {
        let text = text.into();
        if has_looper() {
            self.presenter.present(&text, length);
            return Ok(());
        }

        log::trace!(
            "No looper on calling thread; posting toast to '{}'",
            self.main.name()
        );
        let presenter = Arc::clone(&self.presenter);
        self.main.post(move || presenter.present(&text, length))
    }
}
