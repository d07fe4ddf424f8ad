//! Navigation abstraction the gate redirects through.
//!
//! The gate only needs `navigate(path, mode)`. `MemoryHistory` is a small
//! in-process history stack implementing it, used to observe back-button
//! behavior without a browser.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// How a redirect enters the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// New back-button-visible entry
    Push,
    /// Overwrites the current entry
    Replace,
}

/// Minimal contract of a history provider.
pub trait Navigator {
    /// Navigate to `path`. Fire-and-forget: the gate never waits on it.
    fn navigate(&self, path: &str, mode: NavigationMode);
}

/// One entry in a [`MemoryHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Full path including query and fragment
    pub path: String,
    /// Unique key assigned when the entry was created
    pub key: String,
}

#[derive(Debug)]
struct HistoryState {
    entries: Vec<HistoryEntry>,
    index: usize,
    next_key: u64,
}

impl HistoryState {
    fn entry(&mut self, path: &str) -> HistoryEntry {
        self.next_key += 1;
        HistoryEntry {
            path: path.to_string(),
            key: format!("k{}", self.next_key),
        }
    }
}

/// In-memory history stack.
#[derive(Debug)]
pub struct MemoryHistory {
    state: Mutex<HistoryState>,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: &str) -> Self {
        let mut state = HistoryState {
            entries: Vec::new(),
            index: 0,
            next_key: 0,
        };
        let first = state.entry(initial);
        state.entries.push(first);
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        // No invariant spans a panic point, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an entry after the current one, dropping any forward entries.
    pub fn push(&self, path: &str) {
        let mut state = self.lock();
        let entry = state.entry(path);
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(entry);
        state.index = keep;
    }

    /// Overwrite the current entry.
    pub fn replace(&self, path: &str) {
        let mut state = self.lock();
        let entry = state.entry(path);
        let index = state.index;
        state.entries[index] = entry;
    }

    /// Step back one entry. Returns `false` when already at the first entry.
    pub fn back(&self) -> bool {
        let mut state = self.lock();
        if state.index == 0 {
            return false;
        }
        state.index -= 1;
        true
    }

    /// The entry the history currently points at.
    pub fn current(&self) -> HistoryEntry {
        let state = self.lock();
        state.entries[state.index].clone()
    }

    /// Paths of every entry, oldest first.
    pub fn paths(&self) -> Vec<String> {
        self.lock().entries.iter().map(|e| e.path.clone()).collect()
    }
}

impl Navigator for MemoryHistory {
    fn navigate(&self, path: &str, mode: NavigationMode) {
        match mode {
            NavigationMode::Push => self.push(path),
            NavigationMode::Replace => self.replace(path),
        }
    }
}
