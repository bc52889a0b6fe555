//! Authoritative desktop state.

use crate::config::Config;
use crate::models::{AppDescriptor, AppName, Mode, Taskbar, Viewport, Window, WindowRegistry, Xywh};
use crate::view_action::ViewAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Everything the shell knows: the window registry, the active window,
/// the gesture mode, the taskbar, and the queue of pending render
/// notifications. All mutation is synchronous, on the host's UI thread.
#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub registry: WindowRegistry,
    /// The window receiving input priority, unique or absent. Always a
    /// visible window; minimizing the active window reassigns this.
    pub active: Option<AppName>,
    pub mode: Mode,
    pub viewport: Viewport,
    pub taskbar: Taskbar,
    pub actions: VecDeque<ViewAction>,
    // entries below are configuration copies and are never changed
    pub apps: Vec<AppDescriptor>,
    pub quick_launch: Vec<AppName>,
    pub default_width: i32,
    pub default_height: i32,
    pub narrow_threshold: i32,
    pub cascade_step: i32,
    pub min_visible_margin: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    pub taskbar_height: i32,
    pub drag_timeout: i64,
}

impl State {
    pub(crate) fn new(config: &impl Config, viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(),
            active: None,
            mode: Mode::Normal,
            viewport,
            taskbar: Taskbar::new(),
            actions: Default::default(),
            apps: config.apps(),
            quick_launch: config.quick_launch(),
            default_width: config.default_width(),
            default_height: config.default_height(),
            narrow_threshold: config.narrow_threshold(),
            cascade_step: config.cascade_step(),
            min_visible_margin: config.min_visible_margin(),
            min_window_width: config.min_window_width(),
            min_window_height: config.min_window_height(),
            taskbar_height: config.taskbar_height(),
            drag_timeout: config.drag_timeout(),
        }
    }

    pub(crate) fn load_config(&mut self, config: &impl Config) {
        self.apps = config.apps();
        self.quick_launch = config.quick_launch();
        self.default_width = config.default_width();
        self.default_height = config.default_height();
        self.narrow_threshold = config.narrow_threshold();
        self.cascade_step = config.cascade_step();
        self.min_visible_margin = config.min_visible_margin();
        self.min_window_width = config.min_window_width();
        self.min_window_height = config.min_window_height();
        self.taskbar_height = config.taskbar_height();
        self.drag_timeout = config.drag_timeout();
    }

    /// Look up an application in the launch table.
    #[must_use]
    pub fn descriptor(&self, app: &AppName) -> Option<&AppDescriptor> {
        self.apps.iter().find(|d| &d.name == app)
    }

    /// Return the currently active window.
    #[must_use]
    pub fn active_window(&self) -> Option<&Window> {
        let app = self.active.as_ref()?;
        self.registry.get(app)
    }

    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.viewport.is_narrow(self.narrow_threshold)
    }

    /// The layout a maximized window takes: the full viewport minus the
    /// space the taskbar reserves.
    #[must_use]
    pub fn maximized_xywh(&self) -> Xywh {
        Xywh::new(
            0,
            0,
            self.viewport.width,
            (self.viewport.height - self.taskbar_height).max(0),
        )
    }
}
