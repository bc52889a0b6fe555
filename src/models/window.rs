//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::{AppDescriptor, AppName, Xywh};
use serde::{Deserialize, Serialize};

/// Store Window information: one record per open application instance.
///
/// The hosted application's rendering unit is not part of the record;
/// the host keys it off `app` and mounts/unmounts it with the window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub app: AppName,
    pub title: String,
    pub icon: String,
    /// Placement used while the window is not maximized.
    pub normal: Xywh,
    /// Paint/input priority. Unique across the registry, higher wins.
    pub z_order: u64,
    minimized: bool,
    maximized: bool,
}

impl Window {
    #[must_use]
    pub fn new(descriptor: &AppDescriptor, normal: Xywh, z_order: u64) -> Self {
        Self {
            app: descriptor.name.clone(),
            title: descriptor.title.clone(),
            icon: descriptor.icon.clone(),
            normal,
            z_order,
            minimized: false,
            maximized: false,
        }
    }

    pub fn set_minimized(&mut self, value: bool) {
        self.minimized = value;
    }

    #[must_use]
    pub const fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn set_maximized(&mut self, value: bool) {
        self.maximized = value;
    }

    #[must_use]
    pub const fn maximized(&self) -> bool {
        self.maximized
    }

    /// A minimized window is kept in the registry but excluded from
    /// rendering and hit-testing.
    #[must_use]
    pub const fn visible(&self) -> bool {
        !self.minimized
    }

    #[must_use]
    pub const fn can_focus(&self) -> bool {
        self.visible()
    }

    /// Maximized windows ignore drag and resize gestures.
    #[must_use]
    pub const fn can_drag(&self) -> bool {
        self.visible() && !self.maximized
    }

    #[must_use]
    pub const fn can_resize(&self) -> bool {
        self.can_drag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Window {
        let descriptor = AppDescriptor::new("vscode", "VS Code", "/icons/vscode.png");
        Window::new(&descriptor, Xywh::new(50, 50, 900, 600), 100)
    }

    #[test]
    fn a_minimized_window_should_not_be_visible() {
        let mut subject = subject();
        subject.set_minimized(true);
        assert!(!subject.visible(), "minimized window was still visible");
        subject.set_minimized(false);
        assert!(subject.visible(), "restored window was not visible");
    }

    #[test]
    fn a_maximized_window_should_not_be_draggable() {
        let mut subject = subject();
        subject.set_maximized(true);
        assert!(!subject.can_drag());
        assert!(!subject.can_resize());
        assert!(subject.can_focus(), "maximized window lost focusability");
    }
}
