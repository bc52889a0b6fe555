use super::{AppName, Config, Shell, WindowChange};
use crate::models::Xywh;
use crate::view_action::ViewAction;

impl<C: Config> Shell<C> {
    /// Continuous drag callback: place the window origin, clamped so at
    /// least the configured margin stays inside the viewport on both
    /// axes. Total over any input, including wildly out-of-bounds pointer
    /// coordinates.
    pub fn window_move_handler(&mut self, app: &AppName, x: i32, y: i32) -> bool {
        let (x, y) = Xywh::clamped_origin(self.state.viewport, self.state.min_visible_margin, x, y);
        let mut change = WindowChange::new(app.clone());
        change.x = Some(x);
        change.y = Some(y);
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
        let mut shell = Shell::new_test(Viewport::new(1024, 768));
        shell.window_open_handler(&"vscode".into());
        shell
    }

    #[test]
    fn an_in_bounds_move_should_apply_exactly() {
        let mut shell = shell();
        shell.window_move_handler(&"vscode".into(), 300, 200);
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.x, window.normal.y), (300, 200));
    }

    #[test]
    fn a_negative_origin_should_clamp_to_zero() {
        let mut shell = shell();
        shell.window_move_handler(&"vscode".into(), -250, -1);
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.x, window.normal.y), (0, 0));
    }

    #[test]
    fn an_out_of_bounds_origin_should_clamp_to_the_visible_margin() {
        let mut shell = shell();
        shell.window_move_handler(&"vscode".into(), 5000, 5000);
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.x, window.normal.y), (924, 668));
    }

    #[test]
    fn moving_an_unknown_window_should_be_a_no_op() {
        let mut shell = shell();
        assert!(!shell.window_move_handler(&"browser".into(), 10, 10));
    }
}
