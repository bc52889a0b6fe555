pub mod command_handler;
mod focus_handler;
mod input_event_handler;
mod pointer_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

use super::config::Config;
use super::models::{AppName, Shell, WindowChange};
