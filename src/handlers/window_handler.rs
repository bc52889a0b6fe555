use crate::config::Config;
use crate::models::{AppName, Mode, Shell, Window, Xywh};
use crate::state::State;
use crate::view_action::ViewAction;

impl<C: Config> Shell<C> {
    /// Open a window for `app`, or bring the existing one to the front,
    /// clearing minimized. Exactly one window per application exists
    /// after the call. Opening an application that is not in the launch
    /// table is a no-op.
    pub fn window_open_handler(&mut self, app: &AppName) -> bool {
        if self.state.registry.contains(app) {
            return self.state.restore_or_focus(app);
        }
        let Some(descriptor) = self.state.descriptor(app).cloned() else {
            tracing::warn!("not in the launch table: {}", app);
            return false;
        };

        let narrow = self.state.is_narrow();
        let normal = initial_geometry(&self.state);
        let mut window = Window::new(&descriptor, normal, self.state.registry.next_z());
        // Narrow viewports open everything maximized.
        window.set_maximized(narrow);
        self.state.registry.add(window);
        self.state.actions.push_back(ViewAction::WindowsChanged);
        self.state.set_active(Some(app.clone()));
        true
    }

    /// Remove the window from the registry. When the active window
    /// closes, the remaining visible window with the highest z-order
    /// becomes active, or none if nothing visible remains.
    pub fn window_close_handler(&mut self, app: &AppName) -> bool {
        if !self.state.registry.contains(app) {
            return false;
        }
        self.state.registry.remove(app);
        self.state.actions.push_back(ViewAction::WindowsChanged);
        if self.state.active.as_ref() == Some(app) {
            let next = self.state.registry.top_visible().map(|w| w.app.clone());
            self.state.set_active(next);
        }
        // Drop a gesture aimed at the closed window.
        if self.state.mode.app() == Some(app) {
            self.state.mode = Mode::Normal;
        }
        true
    }
}

/// Viewport-aware placement for a new window: a fixed cascade on regular
/// viewports, near-fullscreen on narrow ones (the remaining margins keep
/// the title bar and taskbar reachable).
fn initial_geometry(state: &State) -> Xywh {
    if state.is_narrow() {
        Xywh::new(
            10,
            10,
            (state.viewport.width - 20).max(0),
            (state.viewport.height - 100).max(0),
        )
    } else {
        let cascade = state.registry.len() as i32 * state.cascade_step;
        Xywh::new(
            50 + cascade,
            50 + cascade,
            state.default_width,
            state.default_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Viewport;

    fn shell() -> Shell<crate::config::TestConfig> {
        Shell::new_test(Viewport::new(1920, 1080))
    }

    #[test]
    fn opening_the_same_app_twice_should_yield_exactly_one_window() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        let first = shell.state.registry.get(&"vscode".into()).unwrap().clone();
        shell.window_open_handler(&"vscode".into());
        assert_eq!(shell.state.registry.len(), 1, "window was duplicated");
        let second = shell.state.registry.get(&"vscode".into()).unwrap();
        assert!(second.z_order > first.z_order);
        assert_eq!(second.normal, first.normal, "reopen moved the window");
    }

    #[test]
    fn reopening_a_minimized_window_should_restore_and_focus_it() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_open_handler(&"browser".into());
        shell.state.minimize_window(&"vscode".into());
        shell.window_open_handler(&"vscode".into());
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert!(!window.minimized());
        assert_eq!(shell.state.active, Some("vscode".into()));
    }

    #[test]
    fn opening_an_unknown_app_should_be_a_no_op() {
        let mut shell = shell();
        assert!(!shell.window_open_handler(&"solitaire".into()));
        assert!(shell.state.registry.is_empty());
        assert_eq!(shell.state.active, None);
    }

    #[test]
    fn new_windows_should_cascade_on_a_regular_viewport() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_open_handler(&"browser".into());
        let first = shell.state.registry.get(&"vscode".into()).unwrap();
        let second = shell.state.registry.get(&"browser".into()).unwrap();
        assert_eq!(first.normal, Xywh::new(50, 50, 900, 600));
        assert_eq!(second.normal, Xywh::new(80, 80, 900, 600));
    }

    #[test]
    fn opening_on_a_narrow_viewport_should_maximize_with_the_compact_geometry() {
        let mut shell = Shell::new_test(Viewport::new(390, 844));
        shell.window_open_handler(&"games".into());
        let window = shell.state.registry.get(&"games".into()).unwrap();
        assert!(window.maximized());
        assert_eq!(window.normal, Xywh::new(10, 10, 370, 744));
    }

    #[test]
    fn a_viewport_smaller_than_the_fixed_margins_should_not_go_negative() {
        let mut shell = Shell::new_test(Viewport::new(60, 40));
        shell.window_open_handler(&"vscode".into());
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!(window.normal, Xywh::new(10, 10, 40, 0));
        assert!(shell.state.maximized_xywh().h >= 0);
    }

    #[test]
    fn a_viewport_exactly_at_the_threshold_should_not_be_narrow() {
        let mut shell = Shell::new_test(Viewport::new(768, 1024));
        shell.window_open_handler(&"games".into());
        assert!(!shell.state.registry.get(&"games".into()).unwrap().maximized());
    }

    #[test]
    fn closing_a_background_window_should_not_change_the_active_window() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_open_handler(&"browser".into());
        shell.window_close_handler(&"vscode".into());
        assert_eq!(shell.state.active, Some("browser".into()));
    }

    #[test]
    fn closing_the_active_window_should_promote_the_highest_remaining_z() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_open_handler(&"browser".into());
        shell.window_open_handler(&"github".into());
        shell.state.focus_window(&"vscode".into());
        shell.state.focus_window(&"github".into());
        shell.window_close_handler(&"github".into());
        assert_eq!(shell.state.active, Some("vscode".into()));
    }

    #[test]
    fn closing_the_last_window_should_leave_no_active_window() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_close_handler(&"vscode".into());
        assert!(shell.state.registry.is_empty());
        assert_eq!(shell.state.active, None);
    }

    #[test]
    fn open_open_focus_close_should_leave_one_active_window() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.window_open_handler(&"browser".into());
        shell.state.focus_window(&"vscode".into());
        shell.window_close_handler(&"browser".into());
        assert_eq!(shell.state.registry.len(), 1);
        assert_eq!(shell.state.active, Some("vscode".into()));
    }

    #[test]
    fn closing_a_window_mid_gesture_should_end_the_gesture() {
        let mut shell = shell();
        shell.window_open_handler(&"vscode".into());
        shell.state.mode = Mode::Dragging {
            app: "vscode".into(),
            offset_x: 10,
            offset_y: 10,
            since: chrono::Utc::now(),
        };
        shell.window_close_handler(&"vscode".into());
        assert!(shell.state.mode.is_normal());
    }
}
