use serde::{Deserialize, Serialize};

use super::{AppName, Window, WindowChange};

/// First z-order value handed out; every focus or open consumes one tick.
const INITIAL_Z: u64 = 100;

/// Wrapper struct holding all open windows, in insertion order, together
/// with the monotonically increasing z-order counter.
///
/// The registry enforces the single-instance policy (at most one window
/// per [`AppName`]) but knows nothing about focus: callers check for an
/// existing record before adding. All operations are total; acting on an
/// unknown name is a no-op.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowRegistry {
    windows: Vec<Window>,
    z_counter: u64,
}

impl WindowRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            windows: Vec::new(),
            z_counter: INITIAL_Z,
        }
    }

    /// Insert a new record. No-op if a window with the same name is
    /// already present.
    pub fn add(&mut self, window: Window) {
        if self.contains(&window.app) {
            tracing::debug!("ignored duplicate window for {}", window.app);
            return;
        }
        self.windows.push(window);
    }

    /// Delete a record. Idempotent.
    pub fn remove(&mut self, app: &AppName) {
        self.windows.retain(|w| &w.app != app);
    }

    /// Merge a partial change into an existing record. Returns true if
    /// the record existed and anything changed.
    pub fn update(&mut self, change: WindowChange) -> bool {
        match self.windows.iter_mut().find(|w| w.app == change.app) {
            Some(window) => change.update(window),
            None => false,
        }
    }

    /// Return the next z-order value and advance the counter.
    pub fn next_z(&mut self) -> u64 {
        let z = self.z_counter;
        self.z_counter += 1;
        z
    }

    #[must_use]
    pub fn contains(&self, app: &AppName) -> bool {
        self.windows.iter().any(|w| &w.app == app)
    }

    #[must_use]
    pub fn get(&self, app: &AppName) -> Option<&Window> {
        self.windows.iter().find(|w| &w.app == app)
    }

    pub fn get_mut(&mut self, app: &AppName) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| &w.app == app)
    }

    /// All open windows in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Window] {
        &self.windows
    }

    /// The visible window with the highest z-order, if any. This is the
    /// window that becomes active when focus has to be recomputed.
    #[must_use]
    pub fn top_visible(&self) -> Option<&Window> {
        self.windows
            .iter()
            .filter(|w| w.visible())
            .max_by_key(|w| w.z_order)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
