//! Window-management core for a simulated desktop shell.
//!
//! The crate owns the registry of open windows, the focus and z-order
//! rules, and the drag/resize gesture state machine. It renders nothing
//! itself: the embedding view layer feeds [`InputEvent`]s in, drains
//! [`ViewAction`]s out, and paints from a [`DesktopState`] snapshot.
// We deny clippy pedantic lints, primarily to keep code as correct as
// possible. The goal of deskwm is to do one thing and to do that one
// thing well: manage windows.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a
// lot of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
pub mod errors;
mod handlers;
mod input_event;
pub mod models;
pub mod state;
mod view_action;

pub use command::Command;
pub use config::{Config, DesktopConfig};
pub use input_event::{InputEvent, PointerTarget, WindowControl};
pub use models::dto::DesktopState;
pub use models::{AppDescriptor, AppName, Mode, Shell, Viewport, Window, WindowRegistry, Xywh};
pub use state::State;
pub use view_action::ViewAction;
