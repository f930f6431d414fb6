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

//! Human-readable rendering of time spans, e.g. `12 days 12 hours 56 minutes 29 seconds`.

use crate::localization::{LocalizationError, PluralKey, PluralsLookup};
use std::time::SystemTime;

/// Milliseconds in one second.
pub const SECOND_MILLIS: u64 = 1_000;
/// Milliseconds in one minute.
pub const MINUTE_MILLIS: u64 = 60 * SECOND_MILLIS;
/// Milliseconds in one hour.
pub const HOUR_MILLIS: u64 = 60 * MINUTE_MILLIS;
/// Milliseconds in one day.
pub const DAY_MILLIS: u64 = 24 * HOUR_MILLIS;

/// A duration split into whole days, hours, minutes and seconds.
///
/// Only `days` is unbounded; the other components stay below their unit's modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DurationParts {
    /// Whole days.
    pub days: u64,
    /// Remaining whole hours, `0..24`.
    pub hours: u64,
    /// Remaining whole minutes, `0..60`.
    pub minutes: u64,
    /// Remaining whole seconds, `0..60`. Sub-second remainders are truncated.
    pub seconds: u64,
}

impl DurationParts {
    /// Decomposes a millisecond count. The sign is discarded.
    pub fn from_millis(millis: i64) -> Self {
        let mut remaining = millis.unsigned_abs();

        let days = remaining / DAY_MILLIS;
        remaining -= days * DAY_MILLIS;
        let hours = remaining / HOUR_MILLIS;
        remaining -= hours * HOUR_MILLIS;
        let minutes = remaining / MINUTE_MILLIS;
        remaining -= minutes * MINUTE_MILLIS;
        let seconds = remaining / SECOND_MILLIS;

        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns the span in whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Formats durations through a [`PluralsLookup`].
///
/// Days, hours and minutes are only rendered when non-zero; seconds are always
/// rendered, so a zero span reads `0 seconds`.
#[derive(Debug, Clone, Default)]
pub struct DurationFormatter<L> {
    lookup: L,
}

impl<L: PluralsLookup> DurationFormatter<L> {
    /// Creates a formatter over the given phrase lookup.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the underlying lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Formats `duration_millis`, or returns `None` if any phrase is missing.
    pub fn format(&self, duration_millis: i64) -> Option<String> {
        self.try_format(duration_millis)
            .map_err(|e| log::warn!("Failed to format duration of {duration_millis}ms: {e}"))
            .ok()
    }

    /// Formats the span between two millisecond timestamps.
    pub fn format_between(&self, start_millis: i64, end_millis: i64) -> Option<String> {
        self.format(end_millis.saturating_sub(start_millis))
    }

    /// Formats the span between two points in wall-clock time.
    pub fn format_span(&self, start: SystemTime, end: SystemTime) -> Option<String> {
        // The direction is irrelevant since the sign is discarded.
        let span = match end.duration_since(start) {
            Ok(span) => span,
            Err(e) => e.duration(),
        };
        let millis = i64::try_from(span.as_millis()).unwrap_or(i64::MAX);
        self.format(millis)
    }

    /// Formats `duration_millis`, reporting which phrase could not be resolved.
    ///
    /// Never produces partial text: either every phrase resolves or the call fails.
    pub fn try_format(&self, duration_millis: i64) -> Result<String, LocalizationError> {
        let parts = DurationParts::from_millis(duration_millis);

        let mut phrases = Vec::with_capacity(4);
        for (key, quantity) in [
            (PluralKey::DurationDays, parts.days),
            (PluralKey::DurationHours, parts.hours),
            (PluralKey::DurationMinutes, parts.minutes),
        ] {
            if quantity > 0 {
                phrases.push(self.lookup.quantity_string(key, quantity)?);
            }
        }
        phrases.push(
            self.lookup
                .quantity_string(PluralKey::DurationSeconds, parts.seconds)?,
        );

        Ok(phrases.join(" "))
    }
}
