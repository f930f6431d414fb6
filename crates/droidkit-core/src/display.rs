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

//! Conversions between density-independent units (dip) and physical pixels.
//!
//! All conversions take a density scale, the number of pixels per dip. The
//! scale must be strictly positive; this is checked in debug builds only.

/// The screen density, in dots per inch, at which one dip equals one pixel.
pub const DENSITY_DEFAULT_DPI: u32 = 160;

/// Converts `units` to a pixel size, rounding to the nearest pixel.
///
/// A non-zero value never rounds to zero: the result is at least one pixel
/// in the direction of the value's sign.
///
/// # Examples
///
/// ```
/// use droidkit_core::display::to_pixel_size;
/// assert_eq!(to_pixel_size(1.0, 2.0), 2);
/// assert_eq!(to_pixel_size(0.1, 0.1), 1);
/// assert_eq!(to_pixel_size(0.0, 3.0), 0);
/// ```
#[inline]
pub fn to_pixel_size(units: f32, density: f32) -> i32 {
    debug_assert!(density > 0.0, "density must be positive, got {density}");
    let value = units * density;
    let rounded = (value + 0.5).floor() as i32;
    if rounded != 0 {
        rounded
    } else if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Converts `units` to a pixel offset, truncating toward zero.
///
/// # Examples
///
/// ```
/// use droidkit_core::display::to_pixel_offset;
/// assert_eq!(to_pixel_offset(1.4, 1.0), 1);
/// assert_eq!(to_pixel_offset(-1.4, 1.0), -1);
/// ```
#[inline]
pub fn to_pixel_offset(units: f32, density: f32) -> i32 {
    debug_assert!(density > 0.0, "density must be positive, got {density}");
    (units * density) as i32
}

/// Converts a pixel count back to density-independent units.
///
/// # Examples
///
/// ```
/// use droidkit_core::display::to_units;
/// assert_eq!(to_units(4, 2.0), 2.0);
/// ```
#[inline]
pub fn to_units(pixels: i32, density: f32) -> f32 {
    debug_assert!(density > 0.0, "density must be positive, got {density}");
    pixels as f32 / density
}

/// The display properties needed for unit conversion.
///
/// Built from code or from a validated [`ToolkitConfig`](crate::ToolkitConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    density: f32,
}

impl DisplayMetrics {
    /// Creates metrics with the given density scale.
    pub fn new(density: f32) -> Self {
        debug_assert!(density > 0.0, "density must be positive, got {density}");
        Self { density }
    }

    /// Creates metrics from a screen density in dots per inch.
    pub fn from_dpi(dpi: u32) -> Self {
        Self::new(dpi as f32 / DENSITY_DEFAULT_DPI as f32)
    }

    /// Returns the density scale (pixels per dip).
    pub fn density(&self) -> f32 {
        self.density
    }

    /// See [`to_pixel_size`].
    pub fn dip_to_pixel_size(&self, dip: f32) -> i32 {
        to_pixel_size(dip, self.density)
    }

    /// See [`to_pixel_offset`].
    pub fn dip_to_pixel_offset(&self, dip: f32) -> i32 {
        to_pixel_offset(dip, self.density)
    }

    /// See [`to_units`].
    pub fn pixel_to_dip(&self, pixels: i32) -> f32 {
        to_units(pixels, self.density)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
