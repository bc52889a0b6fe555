//! Host-supplied configuration for the desktop shell.
use serde::{Deserialize, Serialize};

use crate::models::{AppDescriptor, AppName};

pub trait Config {
    /// The launch table, resolved once when the shell is created. Opening
    /// an application not listed here is a no-op.
    fn apps(&self) -> Vec<AppDescriptor>;

    /// Applications pinned to the taskbar quick-launch area and listed in
    /// the start menu.
    fn quick_launch(&self) -> Vec<AppName>;

    /// Default size of a newly opened window on a regular viewport.
    fn default_width(&self) -> i32;
    fn default_height(&self) -> i32;

    /// Viewports narrower than this get the compact layout: a maximized
    /// window sized to the viewport minus fixed margins.
    fn narrow_threshold(&self) -> i32;

    /// Offset applied per already-open window when cascading new windows.
    fn cascade_step(&self) -> i32;

    /// How many units of a dragged window must stay inside the viewport.
    fn min_visible_margin(&self) -> i32;

    /// Floor a resize gesture cannot shrink a window below.
    fn min_window_width(&self) -> i32;
    fn min_window_height(&self) -> i32;

    /// Vertical space the taskbar reserves; a maximized window fills the
    /// viewport minus this.
    fn taskbar_height(&self) -> i32;

    /// Seconds after which a gesture that never saw its pointer-up is
    /// cancelled by the clock tick.
    fn drag_timeout(&self) -> i64;
}

/// Plain-data implementation of [`Config`] with the stock desktop layout.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DesktopConfig {
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

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            apps: default_apps(),
            quick_launch: vec![
                "vscode".into(),
                "browser".into(),
                "github".into(),
                "games".into(),
            ],
            default_width: 900,
            default_height: 600,
            narrow_threshold: 768,
            cascade_step: 30,
            min_visible_margin: 100,
            min_window_width: 200,
            min_window_height: 120,
            taskbar_height: 50,
            drag_timeout: 10,
        }
    }
}

impl Config for DesktopConfig {
    fn apps(&self) -> Vec<AppDescriptor> {
        self.apps.clone()
    }
    fn quick_launch(&self) -> Vec<AppName> {
        self.quick_launch.clone()
    }
    fn default_width(&self) -> i32 {
        self.default_width
    }
    fn default_height(&self) -> i32 {
        self.default_height
    }
    fn narrow_threshold(&self) -> i32 {
        self.narrow_threshold
    }
    fn cascade_step(&self) -> i32 {
        self.cascade_step
    }
    fn min_visible_margin(&self) -> i32 {
        self.min_visible_margin
    }
    fn min_window_width(&self) -> i32 {
        self.min_window_width
    }
    fn min_window_height(&self) -> i32 {
        self.min_window_height
    }
    fn taskbar_height(&self) -> i32 {
        self.taskbar_height
    }
    fn drag_timeout(&self) -> i64 {
        self.drag_timeout
    }
}

/// The stock launch table of the simulated desktop.
#[must_use]
pub fn default_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new("vscode", "VS Code", "/icons/vscode.png"),
        AppDescriptor::new("browser", "Browser", "/icons/chrome.png"),
        AppDescriptor::new("github", "GitHub Desktop", "/icons/github.png"),
        AppDescriptor::new("games", "Game Center", "/icons/appliance.png"),
        AppDescriptor::new("analyzer", "Wallet Analyzer", "/icons/windows.png"),
        AppDescriptor::new("help", "Documentation", "/icons/question-mark.png"),
    ]
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub apps: Vec<AppDescriptor>,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            apps: default_apps(),
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn apps(&self) -> Vec<AppDescriptor> {
        self.apps.clone()
    }
    fn quick_launch(&self) -> Vec<AppName> {
        vec!["vscode".into(), "browser".into()]
    }
    fn default_width(&self) -> i32 {
        900
    }
    fn default_height(&self) -> i32 {
        600
    }
    fn narrow_threshold(&self) -> i32 {
        768
    }
    fn cascade_step(&self) -> i32 {
        30
    }
    fn min_visible_margin(&self) -> i32 {
        100
    }
    fn min_window_width(&self) -> i32 {
        200
    }
    fn min_window_height(&self) -> i32 {
        120
    }
    fn taskbar_height(&self) -> i32 {
        50
    }
    fn drag_timeout(&self) -> i64 {
        10
    }
}
