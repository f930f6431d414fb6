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

use droidkit_core::ids::{is_generated_id, IdAllocator, MAX_GENERATED_ID};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const IDS_PER_THREAD: usize = 20_000;

fn allocate_concurrently(allocator: Arc<IdAllocator>) -> Vec<u32> {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let allocator = Arc::clone(&allocator);
            thread::spawn(move || {
                (0..IDS_PER_THREAD)
                    .map(|_| allocator.next_id())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("allocating thread panicked"))
        .collect()
}

#[test]
fn test_concurrent_ids_are_pairwise_distinct() {
    // --- ARRANGE ---
    let allocator = Arc::new(IdAllocator::new());

    // --- ACT ---
    let ids = allocate_concurrently(Arc::clone(&allocator));

    // --- ASSERT ---
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(
        unique.len(),
        THREADS * IDS_PER_THREAD,
        "Duplicate id handed out"
    );
    assert!(ids.iter().all(|&id| is_generated_id(id)));

    // Exactly the first N identifiers were consumed.
    assert_eq!(*unique.iter().min().unwrap(), 1);
    assert_eq!(
        *unique.iter().max().unwrap() as usize,
        THREADS * IDS_PER_THREAD
    );
    assert_eq!(allocator.peek() as usize, THREADS * IDS_PER_THREAD + 1);
}

#[test]
fn test_concurrent_ids_across_rollover() {
    // Start close to the top so the counter wraps while threads contend.
    let start = MAX_GENERATED_ID - 1_000;
    let allocator = Arc::new(IdAllocator::starting_at(start));

    let ids = allocate_concurrently(allocator);

    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * IDS_PER_THREAD);
    assert!(unique.contains(&MAX_GENERATED_ID));
    assert!(unique.contains(&1));
    assert!(!unique.contains(&0));
}
