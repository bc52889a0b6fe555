use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppName, Xywh};

/// The gesture state machine. A gesture starts with a pointer-down on a
/// title bar or resize handle and ends with a pointer-up; while one is
/// active every pointer-move becomes a geometry update for that window.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// The window origin follows the pointer, offset by where inside the
    /// title bar the gesture started.
    Dragging {
        app: AppName,
        offset_x: i32,
        offset_y: i32,
        since: DateTime<Utc>,
    },
    /// The window size follows the pointer, relative to the geometry and
    /// pointer position captured at gesture start.
    Resizing {
        app: AppName,
        anchor_x: i32,
        anchor_y: i32,
        start: Xywh,
        since: DateTime<Utc>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Self::Normal
    }
}

impl Mode {
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// The window the active gesture is manipulating, if any.
    #[must_use]
    pub const fn app(&self) -> Option<&AppName> {
        match self {
            Self::Normal => None,
            Self::Dragging { app, .. } | Self::Resizing { app, .. } => Some(app),
        }
    }

    /// When the active gesture started, if any. Used by the clock tick to
    /// cancel a gesture whose terminating pointer-up was lost.
    #[must_use]
    pub const fn since(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Normal => None,
            Self::Dragging { since, .. } | Self::Resizing { since, .. } => Some(*since),
        }
    }
}
