//! Objects (such as windows) used to run the desktop shell.
mod app;
mod geometry;
mod mode;
mod registry;
mod shell;
mod taskbar;
mod window;
mod window_change;

pub mod dto;

pub use app::AppDescriptor;
pub use app::AppName;
pub use geometry::Viewport;
pub use geometry::Xywh;
pub use mode::Mode;
pub use registry::WindowRegistry;
pub use shell::Shell;
pub use taskbar::Taskbar;
pub use window::Window;
pub use window_change::WindowChange;
