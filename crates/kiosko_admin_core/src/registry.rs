//! Explicit dependency registry.
//!
//! The registry memoizes one shared instance per type: the first
//! `resolve` for a type runs the factory, later calls return the same
//! `Arc`. It is built once at the composition root and passed down —
//! never an ambient global — so tests get isolation by constructing a
//! fresh registry.
//!
//! The registry is append-only for the process lifetime; there is no
//! teardown or reset.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

type Cell = Arc<dyn Any + Send + Sync>;

/// Memoizing instance registry keyed by instance type.
#[derive(Default)]
pub struct Registry {
    cells: Mutex<HashMap<TypeId, Cell>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized instance of `T`, running `factory` on first
    /// resolution.
    ///
    /// The lock is not held while the factory runs, so factories may
    /// resolve their own dependencies through the registry. In the
    /// single-frontend host that makes re-entrant resolution safe; under
    /// racing threads a losing factory's instance is discarded and the
    /// first registered one wins.
    pub fn resolve<T, F>(&self, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if let Some(existing) = self.lookup::<T>() {
            return existing;
        }
        let candidate: Cell = Arc::new(factory());
        let mut cells = self.lock();
        let entry = cells.entry(TypeId::of::<T>()).or_insert(candidate);
        downcast::<T>(Arc::clone(entry))
    }

    fn lookup<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let cells = self.lock();
        let entry = cells.get(&TypeId::of::<T>())?;
        Some(downcast::<T>(Arc::clone(entry)))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Cell>> {
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn downcast<T: Send + Sync + 'static>(cell: Cell) -> Arc<T> {
    // Entries are keyed by TypeId::of::<T>, so the downcast cannot fail.
    cell.downcast::<T>()
        .expect("registry entry matches its TypeId key")
}
