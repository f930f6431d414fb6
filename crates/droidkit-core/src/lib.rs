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

//! # Droidkit Core
//!
//! Foundational crate containing the platform-independent helpers of the
//! toolkit: identifier allocation, duration formatting, density conversions,
//! build metadata and service lookup.

#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod ids;
pub mod localization;
pub mod platform;
pub mod service_registry;
pub mod time;

pub use config::ToolkitConfig;
pub use display::DisplayMetrics;
pub use ids::{generate_view_id, IdAllocator};
pub use localization::{EnglishPlurals, LocalizationError, PluralKey, PluralTable, PluralsLookup};
pub use platform::{BuildInfo, SdkLevel};
pub use service_registry::ServiceRegistry;
pub use time::{DurationFormatter, DurationParts};
