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

// Droidkit Sandbox
// Runs every toolkit component once and logs what it did.

use std::sync::Arc;

use anyhow::{Context, Result};
use droidkit_core::service_registry::names;
use droidkit_core::{
    generate_view_id, BuildInfo, DurationFormatter, EnglishPlurals, SdkLevel, ServiceRegistry,
    ToolkitConfig,
};
use droidkit_io::{create_temp_file, CacheDirs};
use droidkit_telemetry::{init_from_config, tag_for, LogGate, Priority};
use droidkit_ui::{Looper, ToastLength, ToastPresenter, ToastText, Toaster};

/// Elapsed time shown by the duration demo: 22 days 14 hours 7 minutes 54 seconds.
const DEMO_DURATION_MILLIS: i64 = 1_951_674_000;

struct SandboxApp;

/// Presents toasts by logging them.
struct LogPresenter;

impl ToastPresenter for LogPresenter {
    fn present(&self, text: &ToastText, length: ToastLength) {
        match text {
            ToastText::Message(message) => {
                log::info!("[toast {:?}] {message}", length.duration());
            }
            ToastText::Resource(id) => {
                log::info!("[toast {:?}] <resource {id:#x}>", length.duration());
            }
        }
    }
}

/// Reads the configuration at `path`, or builds the demo defaults.
fn load_config(path: Option<String>) -> Result<ToolkitConfig> {
    if let Some(path) = path {
        return ToolkitConfig::from_json_file(&path);
    }
    let config = ToolkitConfig {
        debug: true,
        tag_prefix: Some("Sbx".to_string()),
        ..ToolkitConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let config = load_config(std::env::args().nth(1))?;
    init_from_config(&config)?;

    let gate = LogGate::global();
    let tag = tag_for::<SandboxApp>();
    gate.i(tag, &[&"Sandbox started, debug=", &gate.is_enabled()]);

    // Durations
    let formatter = DurationFormatter::new(EnglishPlurals);
    let elapsed = formatter
        .try_format(DEMO_DURATION_MILLIS)
        .context("English plurals are missing a template")?;
    gate.i(tag, &[&"Elapsed: ", &elapsed]);

    // Pixels
    let metrics = config.display_metrics();
    for dip in [0.1_f32, 1.5, 16.0, -1.7] {
        gate.d(
            tag,
            &[
                &dip,
                &"dip -> size ",
                &metrics.dip_to_pixel_size(dip),
                &"px, offset ",
                &metrics.dip_to_pixel_offset(dip),
                &"px",
            ],
        );
    }

    // View ids
    let ids: Vec<u32> = (0..3).map(|_| generate_view_id()).collect();
    gate.d(tag, &[&"Generated view ids: ", &format!("{ids:?}")]);

    // Platform
    let build = BuildInfo::host(SdkLevel::LOLLIPOP);
    gate.i(
        tag,
        &[&"Supported ABIs: ", &build.supported_abis().join(", ")],
    );

    // Temp files
    let cache = CacheDirs::internal(std::env::temp_dir().join("droidkit-sandbox"));
    let file = create_temp_file(&cache, "sandbox", None, Some("demo"))?;
    gate.i(tag, &[&"Created temp file ", &file.display()]);
    if let Err(e) = std::fs::remove_file(&file) {
        gate.emit_with_error(
            Priority::Warn,
            tag,
            &e,
            &[&"Could not remove ", &file.display()],
        );
    }

    // Services and toasts
    let mut main_looper = Looper::spawn("main")?;
    let mut services = ServiceRegistry::new();
    services.insert(Toaster::new(Arc::new(LogPresenter), main_looper.handle()));
    services.insert_named(names::WINDOW, metrics);

    let toaster = services
        .get::<Toaster>()
        .context("Toaster service is not registered")?;
    toaster.show("Hello from the sandbox", ToastLength::Short)?;
    toaster.show(ToastText::Resource(0x7f0e_0001), ToastLength::Long)?;

    main_looper.quit();
    gate.i(tag, &[&"Sandbox finished"]);
    Ok(())
}
