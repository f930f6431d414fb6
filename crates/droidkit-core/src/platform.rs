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

//! Build metadata of the running OS and SDK-level gates.

use serde::Deserialize;

/// An OS API level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct SdkLevel(pub u32);

impl SdkLevel {
    /// API level 16.
    pub const JELLY_BEAN: SdkLevel = SdkLevel(16);
    /// API level 17.
    pub const JELLY_BEAN_MR1: SdkLevel = SdkLevel(17);
    /// API level 19.
    pub const KITKAT: SdkLevel = SdkLevel(19);
    /// API level 21. First level reporting the full ABI list.
    pub const LOLLIPOP: SdkLevel = SdkLevel(21);
    /// API level 23.
    pub const M: SdkLevel = SdkLevel(23);
}

/// A description of the OS build the application runs on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildInfo {
    /// The API level.
    pub sdk_int: SdkLevel,
    /// The primary ABI, as reported by older builds.
    pub cpu_abi: String,
    /// The secondary ABI, as reported by older builds.
    #[serde(default)]
    pub cpu_abi2: Option<String>,
    /// The ordered ABI list reported by newer builds, most preferred first.
    #[serde(default)]
    pub supported_abis: Vec<String>,
}

impl BuildInfo {
    /// Describes the host this process runs on, mapping the target
    /// architecture to its ABI name.
    pub fn host(sdk_int: SdkLevel) -> Self {
        let abis: &[&str] = match std::env::consts::ARCH {
            "aarch64" => &["arm64-v8a", "armeabi-v7a", "armeabi"],
            "arm" => &["armeabi-v7a", "armeabi"],
            "x86_64" => &["x86_64", "x86"],
            "x86" => &["x86"],
            other => {
                log::debug!("No ABI mapping for architecture '{other}'");
                &[]
            }
        };
        let abis: Vec<String> = abis.iter().map(|abi| abi.to_string()).collect();
        Self {
            sdk_int,
            cpu_abi: abis
                .first()
                .cloned()
                .unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            cpu_abi2: abis.get(1).cloned(),
            supported_abis: abis,
        }
    }

    /// Returns `true` if the build is at `level` or newer.
    pub fn is_at_least(&self, level: SdkLevel) -> bool {
        self.sdk_int >= level
    }

    /// Returns the ABIs supported by the device, most preferred first.
    ///
    /// Builds older than [`SdkLevel::LOLLIPOP`] only report a primary and an
    /// optional secondary ABI.
    pub fn supported_abis(&self) -> Vec<String> {
        if self.is_at_least(SdkLevel::LOLLIPOP) {
            return self.supported_abis.clone();
        }
        match self.cpu_abi2.as_deref() {
            Some(abi2) if !abi2.is_empty() => vec![self.cpu_abi.clone(), abi2.to_string()],
            _ => vec![self.cpu_abi.clone()],
        }
    }
}
