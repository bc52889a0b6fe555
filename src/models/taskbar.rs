use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The only state the taskbar owns itself: the live clock and whether the
/// start menu is open. Everything else it shows is read from the registry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Taskbar {
    now: DateTime<Local>,
    pub start_menu_open: bool,
}

impl Taskbar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Local::now(),
            start_menu_open: false,
        }
    }

    /// Refresh the clock. Driven by the host at roughly 1 Hz.
    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    #[must_use]
    pub fn time_label(&self) -> String {
        self.now.format("%H:%M").to_string()
    }

    #[must_use]
    pub fn date_label(&self) -> String {
        self.now.format("%b %-d").to_string()
    }
}

impl Default for Taskbar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_should_match_the_expected_formats() {
        let subject = Taskbar::new();
        assert_eq!(subject.time_label().len(), 5, "expected HH:MM");
        assert!(
            !subject.date_label().is_empty(),
            "expected an abbreviated date"
        );
    }

    #[test]
    fn the_start_menu_should_default_to_closed() {
        assert!(!Taskbar::new().start_menu_open);
    }
}
