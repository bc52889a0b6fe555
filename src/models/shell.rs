use crate::config::Config;
use crate::models::Viewport;
use crate::state::State;

/// Maintains current desktop state. The top-level coordinator: the host
/// feeds it input events and drains `state.actions` after each one.
#[derive(Debug)]
pub struct Shell<C> {
    pub state: State,
    pub(crate) config: C,
}

impl<C> Shell<C>
where
    C: Config,
{
    /// The viewport is injected here once; afterwards the shell only
    /// learns about size changes through `InputEvent::ViewportResized`.
    pub fn new(config: C, viewport: Viewport) -> Self {
        Self {
            state: State::new(&config, viewport),
            config,
        }
    }

    /// Re-read the configuration copies held in the state. Open windows
    /// keep their current geometry and flags.
    pub fn reload_config(&mut self) {
        self.state.load_config(&self.config);
    }
}

#[cfg(test)]
impl Shell<crate::config::TestConfig> {
    pub fn new_test(viewport: Viewport) -> Self {
        Self::new(crate::config::TestConfig::default(), viewport)
    }
}
