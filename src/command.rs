use crate::models::AppName;
use serde::{Deserialize, Serialize};

/// User intents the shell knows how to carry out. Issued by desktop
/// icons, title-bar controls, and the taskbar.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Launch the application, or bring its existing window to the front
    /// (clearing minimized) if one is already open.
    Open(AppName),
    Close(AppName),
    Focus(AppName),
    Minimize(AppName),
    ToggleMaximize(AppName),
    /// Taskbar button click: clear minimized if set, then focus.
    RestoreOrFocus(AppName),
    ToggleStartMenu,
}
