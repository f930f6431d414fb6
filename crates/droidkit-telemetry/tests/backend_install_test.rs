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

use droidkit_telemetry::{init_env_logger, init_tracing, Priority};

// Logger installation is process-wide, so this binary holds a single test.
#[test]
fn test_tracing_after_env_logger_reports_existing_backend() {
    // --- 1. ARRANGE ---
    init_env_logger("info").unwrap();

    // --- 2. ACT ---
    let result = init_tracing(Priority::Debug);

    // --- 3. ASSERT ---
    let message = result.unwrap_err().to_string();
    assert!(
        message.starts_with("A logging backend is already installed"),
        "unexpected error: {message}"
    );
}
