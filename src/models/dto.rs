//! Read-only snapshot types the host view layer paints from.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::errors::Result;
use crate::models::{AppName, Xywh};
use crate::state::State;

/// One running-window button on the taskbar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub app: AppName,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
    pub active: bool,
}

/// One pinned quick-launch icon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuickLaunchButton {
    pub app: AppName,
    pub title: String,
    pub icon: String,
}

/// One window as the view layer should paint it: geometry already
/// resolved against the viewport when maximized, minimized windows
/// filtered out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesktopWindow {
    pub app: AppName,
    pub title: String,
    pub icon: String,
    pub geometry: Xywh,
    pub z_order: u64,
    pub maximized: bool,
    pub active: bool,
}

/// Full paintable snapshot of the desktop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: Vec<DesktopWindow>,
    pub taskbar_buttons: Vec<TaskbarButton>,
    pub quick_launch: Vec<QuickLaunchButton>,
    pub active: Option<AppName>,
    pub clock_time: String,
    pub clock_date: String,
    pub start_menu_open: bool,
}

impl DesktopState {
    /// Serialize the snapshot for a host that consumes JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl From<&State> for DesktopState {
    fn from(state: &State) -> Self {
        let windows = state
            .registry
            .all()
            .iter()
            .filter(|w| w.visible())
            .map(|w| DesktopWindow {
                app: w.app.clone(),
                title: w.title.clone(),
                icon: w.icon.clone(),
                geometry: if w.maximized() {
                    state.maximized_xywh()
                } else {
                    w.normal
                },
                z_order: w.z_order,
                maximized: w.maximized(),
                active: state.active.as_ref() == Some(&w.app),
            })
            .collect();

        // Taskbar buttons list every open window, minimized included.
        let taskbar_buttons = state
            .registry
            .all()
            .iter()
            .map(|w| TaskbarButton {
                app: w.app.clone(),
                title: w.title.clone(),
                icon: w.icon.clone(),
                minimized: w.minimized(),
                active: state.active.as_ref() == Some(&w.app),
            })
            .collect();

        let quick_launch = state
            .quick_launch
            .iter()
            .filter_map(|app| state.descriptor(app))
            .map(|d| QuickLaunchButton {
                app: d.name.clone(),
                title: d.title.clone(),
                icon: d.icon.clone(),
            })
            .collect();

        Self {
            windows,
            taskbar_buttons,
            quick_launch,
            active: state.active.clone(),
            clock_time: state.taskbar.time_label(),
            clock_date: state.taskbar.date_label(),
            start_menu_open: state.taskbar.start_menu_open,
        }
    }
}
