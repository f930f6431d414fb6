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

//! Lookup of system-level services by type or by well-known name.
//!
//! Older platform releases only expose services by name while newer ones also
//! resolve them by type. The [`ServiceRegistry`] supports both: a service
//! registered by type is found with [`get`](ServiceRegistry::get), one
//! registered under a name with [`get_named`](ServiceRegistry::get_named).

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Well-known service names.
pub mod names {
    /// The window manager.
    pub const WINDOW: &str = "window";
    /// The power manager.
    pub const POWER: &str = "power";
    /// The connectivity manager.
    pub const CONNECTIVITY: &str = "connectivity";
    /// The notification manager.
    pub const NOTIFICATION: &str = "notification";
    /// The input method manager.
    pub const INPUT_METHOD: &str = "input_method";
}

type SharedService = Arc<dyn Any + Send + Sync>;

/// A registry of shared services keyed by [`TypeId`] or by name.
///
/// # Example
///
/// ```rust
/// use droidkit_core::service_registry::{names, ServiceRegistry};
///
/// struct PowerManager { interactive: bool }
///
/// let mut registry = ServiceRegistry::new();
/// registry.insert_named(names::POWER, PowerManager { interactive: true });
///
/// let power = registry.get_named::<PowerManager>(names::POWER).unwrap();
/// assert!(power.interactive);
/// ```
#[derive(Default)]
pub struct ServiceRegistry {
    by_type: HashMap<TypeId, SharedService>,
    by_name: HashMap<String, SharedService>,
}

impl ServiceRegistry {
    /// Creates an empty service registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service under its type, replacing any previous one.
    pub fn insert<T: Send + Sync + 'static>(&mut self, service: T) {
        self.by_type.insert(TypeId::of::<T>(), Arc::new(service));
    }

    /// Registers a service under `name`, replacing any previous one.
    pub fn insert_named<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, service: T) {
        self.by_name.insert(name.into(), Arc::new(service));
    }

    /// Returns the service registered for type `T`.
    #[must_use]
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.by_type
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Returns the service registered under `name`.
    ///
    /// Returns `None` if nothing is registered under `name` or if the
    /// registered service is not a `T`.
    #[must_use]
    pub fn get_named<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
        let service = self.by_name.get(name)?.clone();
        match service.downcast::<T>() {
            Ok(service) => Some(service),
            Err(_) => {
                log::warn!("Service '{name}' is not a {}", std::any::type_name::<T>());
                None
            }
        }
    }

    /// Returns `true` if a service of type `T` is registered.
    #[must_use]
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Returns `true` if a service is registered under `name`.
    #[must_use]
    pub fn contains_named(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the number of registered services, typed and named.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len() + self.by_name.len()
    }

    /// Returns `true` if no services are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty() && self.by_name.is_empty()
    }
}
