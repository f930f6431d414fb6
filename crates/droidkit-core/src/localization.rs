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

//! Pluralized phrase lookup.
//!
//! The [`PluralsLookup`] trait is the seam between formatting code and the
//! application's localized resources. Two implementations ship with the crate:
//! [`EnglishPlurals`], a fixed English table, and [`PluralTable`], a table of
//! templates usually loaded from JSON.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// The placeholder replaced by the quantity inside a plural template.
pub const QUANTITY_PLACEHOLDER: &str = "%d";

/// Identifies a pluralizable phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralKey {
    /// `duration_days`
    DurationDays,
    /// `duration_hours`
    DurationHours,
    /// `duration_minutes`
    DurationMinutes,
    /// `duration_seconds`
    DurationSeconds,
}

impl PluralKey {
    /// Returns the resource name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralKey::DurationDays => "duration_days",
            PluralKey::DurationHours => "duration_hours",
            PluralKey::DurationMinutes => "duration_minutes",
            PluralKey::DurationSeconds => "duration_seconds",
        }
    }
}

impl fmt::Display for PluralKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised when a phrase cannot be resolved.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocalizationError {
    /// No template is registered for the key.
    #[error("no plural template registered for '{0}'")]
    MissingTemplate(PluralKey),
    /// The template table could not be parsed.
    #[error("invalid plural table: {0}")]
    InvalidTable(String),
}

/// Resolves a pluralized phrase for a quantity.
pub trait PluralsLookup {
    /// Returns the phrase for `key` rendered with `quantity`.
    fn quantity_string(&self, key: PluralKey, quantity: u64) -> Result<String, LocalizationError>;
}

impl<L: PluralsLookup + ?Sized> PluralsLookup for &L {
    fn quantity_string(&self, key: PluralKey, quantity: u64) -> Result<String, LocalizationError> {
        (**self).quantity_string(key, quantity)
    }
}

/// The `one`/`other` forms of a single phrase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluralTemplate {
    /// Form used when the quantity is exactly one. Falls back to `other`.
    #[serde(default)]
    pub one: Option<String>,
    /// Form used for every other quantity.
    pub other: String,
}

impl PluralTemplate {
    /// Creates a template from its two forms.
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: Some(one.into()),
            other: other.into(),
        }
    }

    /// Renders the form matching `quantity`.
    pub fn render(&self, quantity: u64) -> String {
        let form = match (&self.one, quantity) {
            (Some(one), 1) => one,
            _ => &self.other,
        };
        form.replace(QUANTITY_PLACEHOLDER, &quantity.to_string())
    }
}

/// A lookup backed by a map of templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PluralTable {
    templates: HashMap<PluralKey, PluralTemplate>,
}

impl PluralTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a JSON object keyed by resource name, e.g.
    /// `{"duration_days": {"one": "%d day", "other": "%d days"}}`.
    pub fn from_json(json: &str) -> Result<Self, LocalizationError> {
        serde_json::from_str(json).map_err(|e| LocalizationError::InvalidTable(e.to_string()))
    }

    /// Adds or replaces the template for `key`.
    pub fn with_template(mut self, key: PluralKey, template: PluralTemplate) -> Self {
        self.templates.insert(key, template);
        self
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the table has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl PluralsLookup for PluralTable {
    fn quantity_string(&self, key: PluralKey, quantity: u64) -> Result<String, LocalizationError> {
        self.templates
            .get(&key)
            .map(|template| template.render(quantity))
            .ok_or(LocalizationError::MissingTemplate(key))
    }
}

/// Built-in English phrases ("1 day", "2 hours", ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPlurals;

impl PluralsLookup for EnglishPlurals {
    fn quantity_string(&self, key: PluralKey, quantity: u64) -> Result<String, LocalizationError> {
        let unit = match key {
            PluralKey::DurationDays => "day",
            PluralKey::DurationHours => "hour",
            PluralKey::DurationMinutes => "minute",
            PluralKey::DurationSeconds => "second",
        };
        if quantity == 1 {
            Ok(format!("{quantity} {unit}"))
        } else {
            Ok(format!("{quantity} {unit}s"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_forms() {
        let en = EnglishPlurals;
        assert_eq!(
            en.quantity_string(PluralKey::DurationDays, 1).unwrap(),
            "1 day"
        );
        assert_eq!(
            en.quantity_string(PluralKey::DurationSeconds, 0).unwrap(),
            "0 seconds"
        );
        assert_eq!(
            en.quantity_string(PluralKey::DurationMinutes, 12).unwrap(),
            "12 minutes"
        );
    }

    #[test]
    fn table_from_json() {
        let table = PluralTable::from_json(
            r#"{
                "duration_days": {"one": "%d jour", "other": "%d jours"},
                "duration_seconds": {"other": "%ds"}
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.quantity_string(PluralKey::DurationDays, 1).unwrap(),
            "1 jour"
        );
        assert_eq!(
            table.quantity_string(PluralKey::DurationDays, 3).unwrap(),
            "3 jours"
        );
        // No `one` form: `other` is used for every quantity.
        assert_eq!(
            table
                .quantity_string(PluralKey::DurationSeconds, 1)
                .unwrap(),
            "1s"
        );
    }

    #[test]
    fn table_missing_key() {
        let table = PluralTable::new().with_template(
            PluralKey::DurationHours,
            PluralTemplate::new("%d h", "%d h"),
        );
        assert_eq!(
            table.quantity_string(PluralKey::DurationMinutes, 2),
            Err(LocalizationError::MissingTemplate(
                PluralKey::DurationMinutes
            ))
        );
    }

    #[test]
    fn table_rejects_unknown_keys() {
        let err = PluralTable::from_json(r#"{"duration_weeks": {"other": "%d w"}}"#).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidTable(_)));
    }

    #[test]
    fn key_names() {
        assert_eq!(PluralKey::DurationHours.to_string(), "duration_hours");
    }
}
