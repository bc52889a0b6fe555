use chrono::Utc;

use crate::config::Config;
use crate::input_event::{PointerTarget, WindowControl};
use crate::models::{Mode, Shell};

impl<C: Config> Shell<C> {
    /// Entry point of the gesture state machine. A pointer-down on a
    /// title bar starts a drag, on a resize handle starts a resize; both
    /// focus the window first. Control buttons act without dragging, and
    /// any target outside the start menu closes it.
    pub fn pointer_down_handler(&mut self, target: &PointerTarget, x: i32, y: i32) -> bool {
        // A pointer-down while a gesture is still active means the
        // terminating pointer-up was lost; resolve the stale gesture
        // before starting anything new.
        if !self.state.mode.is_normal() {
            tracing::warn!("pointer-down during an active gesture, resetting");
            self.state.mode = Mode::Normal;
        }
        let menu_closed = self.close_start_menu_on_outside_click(target);

        match target {
            PointerTarget::TitleBar(app) => {
                let focused = self.state.focus_window(app);
                let origin = self
                    .state
                    .registry
                    .get(app)
                    .filter(|w| w.can_drag())
                    .map(|w| (w.normal.x, w.normal.y));
                if let Some((wx, wy)) = origin {
                    self.state.mode = Mode::Dragging {
                        app: app.clone(),
                        offset_x: x - wx,
                        offset_y: y - wy,
                        since: Utc::now(),
                    };
                }
                focused || menu_closed
            }
            PointerTarget::WindowBody(app) => self.state.focus_window(app) || menu_closed,
            PointerTarget::WindowControl(app, control) => {
                let applied = match control {
                    WindowControl::Minimize => self.state.minimize_window(app),
                    WindowControl::Maximize => self.state.toggle_maximize(app),
                    WindowControl::Close => self.window_close_handler(app),
                };
                applied || menu_closed
            }
            PointerTarget::ResizeHandle(app) => {
                let focused = self.state.focus_window(app);
                let start = self
                    .state
                    .registry
                    .get(app)
                    .filter(|w| w.can_resize())
                    .map(|w| w.normal);
                if let Some(start) = start {
                    self.state.mode = Mode::Resizing {
                        app: app.clone(),
                        anchor_x: x,
                        anchor_y: y,
                        start,
                        since: Utc::now(),
                    };
                }
                focused || menu_closed
            }
            PointerTarget::StartButton => {
                self.state.toggle_start_menu();
                true
            }
            PointerTarget::Desktop
            | PointerTarget::DesktopIcon(_)
            | PointerTarget::StartMenu
            | PointerTarget::Taskbar => menu_closed,
        }
    }

    /// While a gesture is active every pointer-move becomes a geometry
    /// update for the captured window.
    pub fn pointer_move_handler(&mut self, x: i32, y: i32) -> bool {
        match self.state.mode.clone() {
            Mode::Dragging {
                app,
                offset_x,
                offset_y,
                ..
            } => self.window_move_handler(&app, x - offset_x, y - offset_y),
            Mode::Resizing {
                app,
                anchor_x,
                anchor_y,
                start,
                ..
            } => self.window_resize_handler(&app, start.w + (x - anchor_x), start.h + (y - anchor_y)),
            Mode::Normal => false,
        }
    }

    /// Pointer-up anywhere ends the gesture: the host attaches the
    /// terminating listeners at the document level for the duration of
    /// the gesture, so dragging survives the pointer leaving the title
    /// bar.
    pub fn pointer_up_handler(&mut self) -> bool {
        if self.state.mode.is_normal() {
            return false;
        }
        self.state.mode = Mode::Normal;
        true
    }

    /// Double-click on a title bar toggles maximize instead of starting a
    /// drag; double-click on a desktop icon launches the application.
    pub fn double_click_handler(&mut self, target: &PointerTarget) -> bool {
        match target {
            PointerTarget::TitleBar(app) => self.state.toggle_maximize(app),
            PointerTarget::DesktopIcon(app) => self.window_open_handler(app),
            _ => false,
        }
    }

    /// Cancel a gesture whose terminating pointer-up was lost (for
    /// example alt-tab mid drag). Driven by the clock tick.
    pub(crate) fn reap_stale_gesture(&mut self) -> bool {
        let Some(since) = self.state.mode.since() else {
            return false;
        };
        if Utc::now().signed_duration_since(since).num_seconds() >= self.state.drag_timeout {
            tracing::warn!("gesture outlived its pointer-up, cancelling");
            self.state.mode = Mode::Normal;
            return true;
        }
        false
    }

    fn close_start_menu_on_outside_click(&mut self, target: &PointerTarget) -> bool {
        if matches!(
            target,
            PointerTarget::StartButton | PointerTarget::StartMenu
        ) {
            return false;
        }
        self.state.close_start_menu()
    }
}
