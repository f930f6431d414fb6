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

//! Lock-free generation of view identifiers.
//!
//! Identifiers assigned at build time carry a non-zero high byte, so runtime
//! identifiers are drawn from `[1, 0x00FF_FFFF]` and can never collide with
//! them. The counter rolls over to 1 (never 0) once the range is exhausted.

use std::sync::atomic::{AtomicU32, Ordering};

/// The largest identifier an [`IdAllocator`] hands out.
pub const MAX_GENERATED_ID: u32 = 0x00FF_FFFF;

/// The number of distinct identifiers produced before the counter repeats.
pub const POOL_SIZE: u32 = MAX_GENERATED_ID;

/// Process-wide allocator behind [`generate_view_id`].
///
/// Created with the process and never torn down; the counter is not persisted.
static VIEW_IDS: IdAllocator = IdAllocator::new();

/// A monotonically increasing identifier source with rollover.
///
/// Every value returned is unique across concurrent callers until the counter
/// wraps around after [`POOL_SIZE`] allocations.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    /// Creates an allocator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    /// Creates an allocator whose first identifier is `start`.
    ///
    /// Values outside `[1, MAX_GENERATED_ID]` start the allocator at `1`.
    #[must_use]
    pub const fn starting_at(start: u32) -> Self {
        let start = if start == 0 || start > MAX_GENERATED_ID {
            1
        } else {
            start
        };
        Self {
            next: AtomicU32::new(start),
        }
    }

    /// Allocates the next identifier.
    ///
    /// Returns the counter value observed before the increment. A lost
    /// compare-and-swap race simply retries with the fresher value.
    pub fn next_id(&self) -> u32 {
        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            let mut candidate = current + 1;
            if candidate > MAX_GENERATED_ID {
                candidate = 1;
            }
            match self.next.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return current,
                Err(observed) => current = observed,
            }
        }
    }

    /// Returns the identifier the next call to [`next_id`](Self::next_id)
    /// would hand out, absent concurrent callers.
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Acquire)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a value suitable for use as a runtime view identifier.
///
/// The value never collides with identifiers generated at build time.
pub fn generate_view_id() -> u32 {
    VIEW_IDS.next_id()
}

/// Returns `true` if `id` lies in the runtime-generated range.
#[inline]
#[must_use]
pub fn is_generated_id(id: u32) -> bool {
    id != 0 && id <= MAX_GENERATED_ID
}
