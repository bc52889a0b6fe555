use crate::models::{AppName, WindowChange};
use crate::state::State;
use crate::view_action::ViewAction;

impl State {
    /// Make this window the active window and give it a fresh top-most
    /// z-order. Every call consumes a counter tick, even when the window
    /// is already on top.
    pub fn focus_window(&mut self, app: &AppName) -> bool {
        // Minimized windows can't take focus.
        match self.registry.get(app) {
            Some(window) if window.can_focus() => {}
            _ => return false,
        }
        let z = self.registry.next_z();
        let mut change = WindowChange::new(app.clone());
        change.z_order = Some(z);
        if self.registry.update(change) {
            self.actions.push_back(ViewAction::WindowsChanged);
        }
        self.set_active(Some(app.clone()));
        true
    }

    /// Record the new active window without consuming a z tick. Used when
    /// focus has to be recomputed after a close or minimize.
    pub(crate) fn set_active(&mut self, app: Option<AppName>) {
        if self.active != app {
            self.active = app;
            self.actions
                .push_back(ViewAction::FocusChanged(self.active.clone()));
        }
    }

    /// Taskbar entry click: clear minimized if set, then focus.
    pub fn restore_or_focus(&mut self, app: &AppName) -> bool {
        if !self.registry.contains(app) {
            return false;
        }
        let mut change = WindowChange::new(app.clone());
        change.minimized = Some(false);
        if self.registry.update(change) {
            self.actions.push_back(ViewAction::WindowsChanged);
        }
        self.focus_window(app)
    }

    /// Hide the window, keeping it in the registry. A minimized window is
    /// never the active window, so minimizing the active one promotes the
    /// visible window with the highest z-order.
    pub fn minimize_window(&mut self, app: &AppName) -> bool {
        let mut change = WindowChange::new(app.clone());
        change.minimized = Some(true);
        if !self.registry.update(change) {
            return false;
        }
        self.actions.push_back(ViewAction::WindowsChanged);
        if self.active.as_ref() == Some(app) {
            let next = self.registry.top_visible().map(|w| w.app.clone());
            self.set_active(next);
        }
        true
    }

    /// Flip the maximized flag. The stored geometry and the z-order are
    /// left untouched, so un-maximizing restores the prior placement.
    pub fn toggle_maximize(&mut self, app: &AppName) -> bool {
        let maximized = match self.registry.get(app) {
            Some(window) => window.maximized(),
            None => return false,
        };
        let mut change = WindowChange::new(app.clone());
        change.maximized = Some(!maximized);
        self.registry.update(change);
        self.actions.push_back(ViewAction::WindowsChanged);
        true
    }
}
