use std::sync::{Mutex, MutexGuard, PoisonError};

/// Component names referenced by the generated file, in first-use order.
///
/// Sibling subtrees render concurrently, so the check-then-insert happens
/// under one lock.
#[derive(Debug, Default)]
pub struct ImportRecord {
    names: Mutex<Vec<String>>,
}

impl ImportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `name`; returns false if it was already present.
    pub fn insert(&self, name: &str) -> bool {
        let mut names = self.guard();
        if names.iter().any(|existing| existing == name) {
            return false;
        }
        names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.guard().iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.guard().clone()
    }
}
