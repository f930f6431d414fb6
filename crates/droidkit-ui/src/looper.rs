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

//! Single-threaded task loops.

use crate::error::UiError;
use crossbeam_channel::{Receiver, Sender};
use droidkit_core::IdAllocator;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

type Task = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    Run(Task),
    Quit,
}

static LOOPER_IDS: IdAllocator = IdAllocator::new();

thread_local! {
    static CURRENT_LOOPER: Cell<Option<u32>> = const { Cell::new(None) };
}

/// Returns `true` if the calling thread is running a [`Looper`].
pub fn has_looper() -> bool {
    current_looper_id().is_some()
}

/// Returns the id of the looper running on the calling thread.
pub fn current_looper_id() -> Option<u32> {
    CURRENT_LOOPER.with(Cell::get)
}

/// A cloneable handle for posting tasks to a [`Looper`].
#[derive(Clone)]
pub struct LooperHandle {
    id: u32,
    name: Arc<str>,
    tx: Sender<Message>,
    closed: Arc<RwLock<bool>>,
}

impl LooperHandle {
    /// Queues `task` to run on the looper thread after every task posted before it.
    ///
    /// A task accepted here always runs, even when the looper is quitting.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) -> Result<(), UiError> {
        // Held across the send so the looper cannot close in between.
        let closed = self.closed.read().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return Err(UiError::LooperGone(self.name.to_string()));
        }
        self.tx
            .send(Message::Run(Box::new(task)))
            .map_err(|_| UiError::LooperGone(self.name.to_string()))
    }

    /// Returns `true` if called from this looper's thread.
    pub fn is_current_thread(&self) -> bool {
        current_looper_id() == Some(self.id)
    }

    /// Returns the looper's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for LooperHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LooperHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// A thread running posted tasks one at a time, in posting order.
///
/// Dropping the looper quits it after the already queued tasks have run.
#[derive(Debug)]
pub struct Looper {
    handle: LooperHandle,
    thread: Option<thread::JoinHandle<()>>,
}

impl Looper {
    /// Starts a looper on a new thread called `name`.
    pub fn spawn(name: impl Into<String>) -> Result<Self, UiError> {
        let name: Arc<str> = Arc::from(name.into());
        let id = LOOPER_IDS.next_id();
        let (tx, rx) = crossbeam_channel::unbounded();
        let closed = Arc::new(RwLock::new(false));

        let thread_name = Arc::clone(&name);
        let thread_closed = Arc::clone(&closed);
        let thread = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || run_loop(id, &thread_name, rx, &thread_closed))
            .map_err(UiError::Spawn)?;

        Ok(Self {
            handle: LooperHandle {
                id,
                name,
                tx,
                closed,
            },
            thread: Some(thread),
        })
    }

    /// Returns a handle for posting tasks.
    pub fn handle(&self) -> LooperHandle {
        self.handle.clone()
    }

    /// Stops the looper once the queued tasks have run, and waits for it.
    ///
    /// Called from the looper's own thread, this only requests the stop.
    pub fn quit(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        // The receiver is only gone if the thread already exited.
        let _ = self.handle.tx.send(Message::Quit);
        if self.handle.is_current_thread() {
            return;
        }
        if thread.join().is_err() {
            log::error!("Looper '{}' thread panicked", self.handle.name);
        }
    }
}

impl Drop for Looper {
    fn drop(&mut self) {
        self.quit();
    }
}

fn run_loop(id: u32, name: &str, rx: Receiver<Message>, closed: &RwLock<bool>) {
    CURRENT_LOOPER.with(|current| current.set(Some(id)));
    log::debug!("Looper '{name}' started.");

    for message in rx.iter() {
        match message {
            Message::Run(task) => run_task(name, task),
            Message::Quit => break,
        }
    }

    *closed.write().unwrap_or_else(PoisonError::into_inner) = true;
    // Tasks accepted before closing are still queued behind the quit request.
    for message in rx.try_iter() {
        if let Message::Run(task) = message {
            run_task(name, task);
        }
    }

    CURRENT_LOOPER.with(|current| current.set(None));
    log::debug!("Looper '{name}' stopped.");
}

fn run_task(name: &str, task: Task) {
    if catch_unwind(AssertUnwindSafe(task)).is_err() {
        log::error!("Task on looper '{name}' panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_tasks_run_in_order_on_looper_thread() {
        let looper = Looper::spawn("test-order").unwrap();
        let handle = looper.handle();
        let (tx, rx) = crossbeam_channel::unbounded();

        for i in 0..10 {
            let tx = tx.clone();
            handle
                .post(move || {
                    let name = thread::current().name().map(str::to_string);
                    tx.send((i, name, has_looper())).unwrap();
                })
                .unwrap();
        }

        for expected in 0..10 {
            let (i, name, on_looper) = rx.recv_timeout(TIMEOUT).unwrap();
            assert_eq!(i, expected);
            assert_eq!(name.as_deref(), Some("test-order"));
            assert!(on_looper);
        }
    }

    #[test]
    fn test_caller_thread_has_no_looper() {
        let looper = Looper::spawn("test-current").unwrap();
        assert!(!has_looper());
        assert!(!looper.handle().is_current_thread());

        let handle = looper.handle();
        let (tx, rx) = crossbeam_channel::bounded(1);
        looper
            .handle()
            .post(move || tx.send(handle.is_current_thread()).unwrap())
            .unwrap();
        assert!(rx.recv_timeout(TIMEOUT).unwrap());
    }

    #[test]
    fn test_quit_drains_then_rejects() {
        let mut looper = Looper::spawn("test-quit").unwrap();
        let handle = looper.handle();
        let (tx, rx) = crossbeam_channel::unbounded();

        for i in 0..3 {
            let tx = tx.clone();
            handle.post(move || tx.send(i).unwrap()).unwrap();
        }
        looper.quit();

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(matches!(
            handle.post(|| {}),
            Err(UiError::LooperGone(ref name)) if name == "test-quit"
        ));
    }

    #[test]
    fn test_every_accepted_post_runs_across_quit() {
        let mut looper = Looper::spawn("test-quit-race").unwrap();
        let handle = looper.handle();
        let executed = Arc::new(AtomicUsize::new(0));

        let poster = {
            let executed = Arc::clone(&executed);
            thread::spawn(move || {
                let mut accepted = 0;
                loop {
                    let executed = Arc::clone(&executed);
                    let task = move || {
                        executed.fetch_add(1, Ordering::SeqCst);
                    };
                    if handle.post(task).is_err() {
                        return accepted;
                    }
                    accepted += 1;
                }
            })
        };

        thread::sleep(Duration::from_millis(10));
        looper.quit();
        let accepted = poster.join().unwrap();

        assert!(accepted > 0);
        assert_eq!(executed.load(Ordering::SeqCst), accepted);
    }

    #[test]
    fn test_panicking_task_keeps_looper_alive() {
        let looper = Looper::spawn("test-panic").unwrap();
        let handle = looper.handle();
        let (tx, rx) = crossbeam_channel::bounded(1);

        handle.post(|| panic!("boom")).unwrap();
        handle
            .post(move || tx.send("still running").unwrap())
            .unwrap();

        assert_eq!(rx.recv_timeout(TIMEOUT).unwrap(), "still running");
    }
}
