use crate::models::AppName;
use serde::{Deserialize, Serialize};

/// Render notifications queued by handlers and drained by the host view
/// layer after each event. Coarse by design: the host repaints from a
/// fresh state snapshot rather than patching incrementally.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum ViewAction {
    /// A window was opened, closed, or had geometry/flags changed.
    WindowsChanged,
    FocusChanged(Option<AppName>),
    /// The clock ticked or the start menu toggled.
    TaskbarChanged,
}
