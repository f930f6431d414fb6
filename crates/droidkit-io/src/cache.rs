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

//! Temporary files in the application cache.

use std::io;
use std::path::{Path, PathBuf};

/// The shortest prefix accepted for a temporary file name.
pub const MIN_PREFIX_LENGTH: usize = 3;

/// Suffix used when the caller gives none.
pub const DEFAULT_SUFFIX: &str = ".tmp";

/// Errors raised while creating cache files.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The file name prefix is shorter than [`MIN_PREFIX_LENGTH`].
    #[error(
        "temp file prefix '{0}' is shorter than {min} characters",
        min = MIN_PREFIX_LENGTH
    )]
    PrefixTooShort(String),
    /// The output directory could not be created.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file itself could not be created or persisted.
    #[error("failed to create temp file in '{path}': {source}")]
    CreateFile {
        /// The directory the file was created in.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// The cache directories available to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDirs {
    /// Private cache, always present.
    pub internal: PathBuf,
    /// Cache on shared storage, when mounted.
    pub external: Option<PathBuf>,
}

impl CacheDirs {
    /// Creates a set with only the internal cache.
    pub fn internal(path: impl Into<PathBuf>) -> Self {
        Self {
            internal: path.into(),
            external: None,
        }
    }

    /// Adds an external cache directory.
    pub fn with_external(mut self, path: impl Into<PathBuf>) -> Self {
        self.external = Some(path.into());
        self
    }

    /// Returns the external cache when it exists, the internal one otherwise.
    pub fn preferred(&self) -> &Path {
        match &self.external {
            Some(external) if external.is_dir() => external,
            _ => &self.internal,
        }
    }
}

/// Creates an empty file named `<prefix><random><suffix>` in the preferred
/// cache directory, or in `sub_directory` below it.
///
/// Missing directories are created. The file is kept after the call; the
/// caller owns its removal.
pub fn create_temp_file(
    dirs: &CacheDirs,
    prefix: &str,
    suffix: Option<&str>,
    sub_directory: Option<&str>,
) -> Result<PathBuf, CacheError> {
    if prefix.chars().count() < MIN_PREFIX_LENGTH {
        return Err(CacheError::PrefixTooShort(prefix.to_string()));
    }

    let output_dir = match sub_directory {
        Some(sub) if !sub.is_empty() => dirs.preferred().join(sub),
        _ => dirs.preferred().to_path_buf(),
    };
    std::fs::create_dir_all(&output_dir).map_err(|source| CacheError::CreateDir {
        path: output_dir.clone(),
        source,
    })?;

    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix.unwrap_or(DEFAULT_SUFFIX))
        .tempfile_in(&output_dir)
        .map_err(|source| CacheError::CreateFile {
            path: output_dir.clone(),
            source,
        })?;
    let (_, path) = file.keep().map_err(|e| CacheError::CreateFile {
        path: output_dir.clone(),
        source: e.error,
    })?;

    log::debug!("Created temp file {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    #[test]
    fn creates_file_in_internal_cache() {
        let root = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(root.path());

        let path = create_temp_file(&dirs, "img", Some(".png"), None).unwrap();

        assert!(path.is_file());
        assert_eq!(path.parent().unwrap(), root.path());
        let name = file_name(&path);
        assert!(name.starts_with("img"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn default_suffix_and_sub_directory() {
        let root = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(root.path());

        let path = create_temp_file(&dirs, "log", None, Some("crash/reports")).unwrap();

        assert_eq!(path.parent().unwrap(), root.path().join("crash/reports"));
        assert!(file_name(&path).ends_with(DEFAULT_SUFFIX));
    }

    #[test]
    fn empty_sub_directory_means_root() {
        let root = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(root.path());

        let path = create_temp_file(&dirs, "abc", None, Some("")).unwrap();
        assert_eq!(path.parent().unwrap(), root.path());
    }

    #[test]
    fn prefers_existing_external_cache() {
        let internal = tempfile::tempdir().unwrap();
        let external = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(internal.path()).with_external(external.path());

        let path = create_temp_file(&dirs, "ext", None, None).unwrap();
        assert_eq!(path.parent().unwrap(), external.path());
    }

    #[test]
    fn falls_back_when_external_is_missing() {
        let internal = tempfile::tempdir().unwrap();
        let dirs =
            CacheDirs::internal(internal.path()).with_external(internal.path().join("unmounted"));

        assert_eq!(dirs.preferred(), internal.path());
        let path = create_temp_file(&dirs, "int", None, None).unwrap();
        assert_eq!(path.parent().unwrap(), internal.path());
    }

    #[test]
    fn rejects_short_prefix() {
        let root = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(root.path());

        let err = create_temp_file(&dirs, "ab", None, None).unwrap_err();
        assert!(matches!(err, CacheError::PrefixTooShort(ref p) if p == "ab"));
    }

    #[test]
    fn distinct_files_for_same_prefix() {
        let root = tempfile::tempdir().unwrap();
        let dirs = CacheDirs::internal(root.path());

        let a = create_temp_file(&dirs, "dup", None, None).unwrap();
        let b = create_temp_file(&dirs, "dup", None, None).unwrap();
        assert_ne!(a, b);
    }
}
