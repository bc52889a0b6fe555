use crate::command::Command;
use crate::models::{AppName, Viewport};
use serde::{Deserialize, Serialize};

/// What the pointer was over when an event fired. Resolved by the host's
/// hit-testing; the core only cares about the roles, not the pixels.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum PointerTarget {
    Desktop,
    DesktopIcon(AppName),
    TitleBar(AppName),
    /// Anywhere in a window below the title bar.
    WindowBody(AppName),
    WindowControl(AppName, WindowControl),
    ResizeHandle(AppName),
    StartButton,
    StartMenu,
    Taskbar,
}

/// The three title-bar buttons.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

/// Raw UI events entering the core. Touch events map onto the pointer
/// variants; the host normalizes them before handing them over.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum InputEvent {
    PointerDown { target: PointerTarget, x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    DoubleClick { target: PointerTarget },
    /// 1 Hz heartbeat: refreshes the clock and reaps stale gestures.
    ClockTick,
    /// Records the new viewport size. Open windows are not reflowed.
    ViewportResized(Viewport),
    SendCommand(Command),
}
