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

//! # Droidkit UI
//!
//! Thread-affine UI work. A [`Looper`] owns a thread that runs posted tasks in
//! order; the [`Toaster`] uses the main looper to present toasts requested from
//! threads that have no looper of their own.

#![warn(missing_docs)]

pub mod error;
pub mod looper;
pub mod toast;

pub use error::UiError;
pub use looper::{has_looper, Looper, LooperHandle};
pub use toast::{ToastLength, ToastPresenter, ToastText, Toaster};
