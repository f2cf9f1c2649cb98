use sj_auth::{NavigationMode, Navigator, Route};

use std::sync::{Mutex, PoisonError};

use log::info;

/// Navigator for a terminal: there is no page to move, so the target is
/// logged and kept for the command's output.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<(Route, NavigationMode)>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent navigation, if any.
    pub fn last(&self) -> Option<(Route, NavigationMode)> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &Route, mode: NavigationMode) {
        info!("Navigate ({mode:?}) -> {route}");
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some((route.clone(), mode));
    }
}
