use crate::command::Command;
use crate::config::Config;
use crate::models::Shell;
use crate::state::State;
use crate::view_action::ViewAction;

impl<C: Config> Shell<C> {
    /// Processes a command and invokes the associated function. Commands
    /// are how the taskbar, start menu, and desktop icons talk back to
    /// the shell.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        match command {
            Command::Open(app) => {
                // Launching from the start menu also closes it.
                let menu_closed = self.state.close_start_menu();
                self.window_open_handler(app) || menu_closed
            }
            Command::Close(app) => self.window_close_handler(app),
            Command::Focus(app) => self.state.focus_window(app),
            Command::Minimize(app) => self.state.minimize_window(app),
            Command::ToggleMaximize(app) => self.state.toggle_maximize(app),
            Command::RestoreOrFocus(app) => self.state.restore_or_focus(app),
            Command::ToggleStartMenu => {
                self.state.toggle_start_menu();
                true
            }
        }
    }
}

impl State {
    pub fn toggle_start_menu(&mut self) {
        self.taskbar.start_menu_open = !self.taskbar.start_menu_open;
        self.actions.push_back(ViewAction::TaskbarChanged);
    }

    /// Close the start menu if it is open. Returns true if it was.
    pub(crate) fn close_start_menu(&mut self) -> bool {
        if !self.taskbar.start_menu_open {
            return false;
        }
        self.taskbar.start_menu_open = false;
        self.actions.push_back(ViewAction::TaskbarChanged);
        true
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
    fn launching_from_the_start_menu_should_close_it() {
        let mut shell = shell();
        shell.command_handler(&Command::ToggleStartMenu);
        assert!(shell.state.taskbar.start_menu_open);
        shell.command_handler(&Command::Open("vscode".into()));
        assert!(!shell.state.taskbar.start_menu_open);
        assert!(shell.state.registry.contains(&"vscode".into()));
    }

    #[test]
    fn restore_or_focus_should_route_to_the_focus_handler() {
        let mut shell = shell();
        shell.command_handler(&Command::Open("vscode".into()));
        shell.command_handler(&Command::Minimize("vscode".into()));
        shell.command_handler(&Command::RestoreOrFocus("vscode".into()));
        assert_eq!(shell.state.active, Some("vscode".into()));
    }

    #[test]
    fn commands_against_unknown_windows_should_be_no_ops() {
        let mut shell = shell();
        assert!(!shell.command_handler(&Command::Close("vscode".into())));
        assert!(!shell.command_handler(&Command::Focus("vscode".into())));
        assert!(!shell.command_handler(&Command::Minimize("vscode".into())));
        assert!(!shell.command_handler(&Command::ToggleMaximize("vscode".into())));
    }
}
