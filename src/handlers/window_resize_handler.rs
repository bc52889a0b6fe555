use super::{AppName, Config, Shell, WindowChange};
use crate::view_action::ViewAction;

impl<C: Config> Shell<C> {
    /// Continuous resize callback: apply the new size, floored at the
    /// configured minimum so a window can never shrink past usability.
    pub fn window_resize_handler(&mut self, app: &AppName, w: i32, h: i32) -> bool {
        let mut change = WindowChange::new(app.clone());
        change.w = Some(w.max(self.state.min_window_width));
        change.h = Some(h.max(self.state.min_window_height));
        if self.state.registry.update(change) {
            self.state.actions.push_back(ViewAction::WindowsChanged);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Viewport;

    fn shell() -> Shell<crate::config::TestConfig> {
        let mut shell = Shell::new_test(Viewport::new(1920, 1080));
        shell.window_open_handler(&"vscode".into());
        shell
    }

    #[test]
    fn a_resize_should_change_only_the_size() {
        let mut shell = shell();
        shell.window_resize_handler(&"vscode".into(), 1000, 700);
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.w, window.normal.h), (1000, 700));
        assert_eq!((window.normal.x, window.normal.y), (50, 50));
    }

    #[test]
    fn a_resize_should_floor_at_the_minimum_size() {
        let mut shell = shell();
        shell.window_resize_handler(&"vscode".into(), 5, -40);
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.w, window.normal.h), (200, 120));
    }

    #[test]
    fn resizing_an_unknown_window_should_be_a_no_op() {
        let mut shell = shell();
        assert!(!shell.window_resize_handler(&"browser".into(), 500, 500));
    }
}
