//! Common parts of work orchestration.

use std::sync::Arc;

use parking_lot::RwLock;

pub const MISSING_DATA: &str = "Missing data, dependency management failed us?";

/// A unit of work.
///
/// Data produced by work is written into a Context (type parameter C).
pub trait Work<C, E> {
    /// A short name, used when logging.
    fn name(&self) -> &'static str;

    fn exec(&self, context: &C) -> Result<(), E>;
}

/// A slot in a context, written once by the work that produces it and read by
/// the work that runs after.
pub struct ContextItem<T> {
    name: &'static str,
    value: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> ContextItem<T> {
    pub fn new(name: &'static str) -> Self {
        ContextItem {
            name,
            value: Arc::new(RwLock::new(None)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_set(&self) -> bool {
        self.value.read().is_some()
    }

    pub fn try_get(&self) -> Option<Arc<T>> {
        self.value.read().as_ref().cloned()
    }

    /// Read the value, panicking if the work that produces it hasn't run.
    pub fn get(&self) -> Arc<T> {
        self.try_get()
            .unwrap_or_else(|| panic!("{}: {MISSING_DATA}", self.name))
    }

    pub fn set(&self, value: T) {
        *self.value.write() = Some(Arc::new(value));
    }
}

impl<T> Clone for ContextItem<T> {
    fn clone(&self) -> Self {
        ContextItem {
            name: self.name,
            value: self.value.clone(),
        }
    }
}
