use crate::config::Config;
use crate::input_event::InputEvent;
use crate::models::Shell;
use crate::view_action::ViewAction;

impl<C: Config> Shell<C> {
    /// Process one UI event and apply its changes to the state. Returns
    /// true if something the view layer paints from changed; the
    /// specifics are queued in `state.actions`.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { target, x, y } => self.pointer_down_handler(&target, x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move_handler(x, y),
            InputEvent::PointerUp => self.pointer_up_handler(),
            InputEvent::DoubleClick { target } => self.double_click_handler(&target),
            InputEvent::ClockTick => {
                self.state.taskbar.tick();
                self.state.actions.push_back(ViewAction::TaskbarChanged);
                self.reap_stale_gesture();
                true
            }
            InputEvent::ViewportResized(viewport) => {
                // Record the new size only; open windows are not
                // reflowed. The next open or drag-clamp will use it.
                self.state.viewport = viewport;
                false
            }
            InputEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::input_event::PointerTarget;
    use crate::models::{Shell, Viewport};

    #[test]
    fn a_viewport_resize_should_not_move_open_windows() {
        let mut shell = Shell::new_test(Viewport::new(1920, 1080));
        shell.handle_event(InputEvent::SendCommand(Command::Open("vscode".into())));
        let before = shell.state.registry.get(&"vscode".into()).unwrap().normal;
        shell.handle_event(InputEvent::ViewportResized(Viewport::new(640, 480)));
        let after = shell.state.registry.get(&"vscode".into()).unwrap().normal;
        assert_eq!(before, after, "resize reflowed an open window");
        assert_eq!(shell.state.viewport, Viewport::new(640, 480));
    }

    #[test]
    fn the_next_drag_clamp_should_use_the_recorded_viewport() {
        let mut shell = Shell::new_test(Viewport::new(1920, 1080));
        shell.handle_event(InputEvent::SendCommand(Command::Open("vscode".into())));
        shell.handle_event(InputEvent::ViewportResized(Viewport::new(640, 480)));
        shell.handle_event(InputEvent::PointerDown {
            target: PointerTarget::TitleBar("vscode".into()),
            x: 60,
            y: 60,
        });
        shell.handle_event(InputEvent::PointerMove { x: 5000, y: 5000 });
        let window = shell.state.registry.get(&"vscode".into()).unwrap();
        assert_eq!((window.normal.x, window.normal.y), (540, 380));
    }

    #[test]
    fn a_clock_tick_should_queue_a_taskbar_repaint() {
        let mut shell = Shell::new_test(Viewport::new(1920, 1080));
        shell.state.actions.clear();
        assert!(shell.handle_event(InputEvent::ClockTick));
        assert_eq!(
            shell.state.actions.pop_front(),
            Some(ViewAction::TaskbarChanged)
        );
    }

    #[test]
    fn events_should_queue_view_actions_for_the_host_to_drain() {
        let mut shell = Shell::new_test(Viewport::new(1920, 1080));
        shell.handle_event(InputEvent::SendCommand(Command::Open("vscode".into())));
        let drained: Vec<ViewAction> = shell.state.actions.drain(..).collect();
        assert!(drained.contains(&ViewAction::WindowsChanged));
        assert!(drained.contains(&ViewAction::FocusChanged(Some("vscode".into()))));
    }
}
