use super::AppName;
use super::Window;

/// A partial change to merge into an existing window record. Fields left
/// as `None` keep the current value.
#[derive(Debug, Clone)]
pub struct WindowChange {
    pub app: AppName,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub z_order: Option<u64>,
    pub minimized: Option<bool>,
    pub maximized: Option<bool>,
}

impl WindowChange {
    #[must_use]
    pub const fn new(app: AppName) -> Self {
        Self {
            app,
            x: None,
            y: None,
            w: None,
            h: None,
            z_order: None,
            minimized: None,
            maximized: None,
        }
    }

    /// Apply the patch. Returns true if anything actually changed.
    pub fn update(self, window: &mut Window) -> bool {
        let mut changed = false;
        if let Some(x) = self.x {
            changed = changed || window.normal.x != x;
            window.normal.x = x;
        }
        if let Some(y) = self.y {
            changed = changed || window.normal.y != y;
            window.normal.y = y;
        }
        if let Some(w) = self.w {
            changed = changed || window.normal.w != w;
            window.normal.w = w;
        }
        if let Some(h) = self.h {
            changed = changed || window.normal.h != h;
            window.normal.h = h;
        }
        if let Some(z_order) = self.z_order {
            changed = changed || window.z_order != z_order;
            window.z_order = z_order;
        }
        if let Some(minimized) = self.minimized {
            changed = changed || window.minimized() != minimized;
            window.set_minimized(minimized);
        }
        if let Some(maximized) = self.maximized {
            changed = changed || window.maximized() != maximized;
            window.set_maximized(maximized);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppDescriptor, Xywh};

    fn subject() -> Window {
        let descriptor = AppDescriptor::new("browser", "Browser", "/icons/chrome.png");
        Window::new(&descriptor, Xywh::new(50, 50, 900, 600), 100)
    }

    #[test]
    fn update_should_only_touch_set_fields() {
        let mut window = subject();
        let mut change = WindowChange::new(window.app.clone());
        change.x = Some(80);
        assert!(change.update(&mut window));
        assert_eq!(window.normal, Xywh::new(80, 50, 900, 600));
        assert_eq!(window.z_order, 100);
    }

    #[test]
    fn an_empty_change_should_report_no_change() {
        let mut window = subject();
        let change = WindowChange::new(window.app.clone());
        assert!(!change.update(&mut window));
    }

    #[test]
    fn a_no_op_value_should_report_no_change() {
        let mut window = subject();
        let mut change = WindowChange::new(window.app.clone());
        change.minimized = Some(false);
        assert!(!change.update(&mut window));
    }
}
