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

//! Construction of prefixed log tags.

/// The longest tag the platform log accepts.
pub const MAX_TAG_LENGTH: usize = 23;

/// Prepends `prefix` to `raw`.
///
/// When the combined tag would exceed [`MAX_TAG_LENGTH`] characters, the
/// prefix is replaced by its *length* in decimal and `raw` is cut so the tag
/// is exactly [`MAX_TAG_LENGTH`] characters long.
///
/// # Examples
///
/// ```
/// use droidkit_telemetry::make_tag;
/// assert_eq!(make_tag("app_", "Main"), "app_Main");
/// assert_eq!(make_tag("app_", "VeryLongClassNameExceedingCap"), "4VeryLongClassNameExcee");
/// ```
pub fn make_tag(prefix: &str, raw: &str) -> String {
    let prefix_len = prefix.chars().count();
    if prefix_len + raw.chars().count() <= MAX_TAG_LENGTH {
        return format!("{prefix}{raw}");
    }

    let mut tag = prefix_len.to_string();
    let room = MAX_TAG_LENGTH.saturating_sub(tag.len());
    tag.extend(raw.chars().take(room));
    tag
}

/// Returns the unqualified name of `T`, for use as a raw tag.
///
/// Generic parameters are dropped, so `Vec<u8>` yields `Vec`.
pub fn tag_for<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MainActivity;

    #[test]
    fn short_tags_keep_prefix() {
        assert_eq!(make_tag("app_", "Main"), "app_Main");
        assert_eq!(make_tag("", "Main"), "Main");
    }

    #[test]
    fn tag_at_exact_cap_is_untouched() {
        let raw = "A".repeat(MAX_TAG_LENGTH - 4);
        let tag = make_tag("app_", &raw);
        assert_eq!(tag, format!("app_{raw}"));
        assert_eq!(tag.len(), MAX_TAG_LENGTH);
    }

    #[test]
    fn long_tags_use_prefix_length() {
        let tag = make_tag("app_", "VeryLongClassNameExceedingCap");
        assert_eq!(tag, "4VeryLongClassNameExcee");
        assert_eq!(tag.chars().count(), MAX_TAG_LENGTH);
        // Deterministic.
        assert_eq!(tag, make_tag("app_", "VeryLongClassNameExceedingCap"));
    }

    #[test]
    fn long_prefix_with_short_raw() {
        let prefix = "p".repeat(30);
        assert_eq!(make_tag(&prefix, "Io"), "30Io");
    }

    #[test]
    fn multibyte_raw_is_cut_on_char_boundary() {
        let raw = "é".repeat(30);
        let tag = make_tag("x_", &raw);
        assert_eq!(tag.chars().count(), MAX_TAG_LENGTH);
        assert!(tag.starts_with('2'));
    }

    #[test]
    fn type_names() {
        assert_eq!(tag_for::<MainActivity>(), "MainActivity");
        assert_eq!(tag_for::<Vec<u8>>(), "Vec");
        assert_eq!(tag_for::<u32>(), "u32");
    }
}
