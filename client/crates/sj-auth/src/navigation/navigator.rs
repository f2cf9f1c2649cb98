use crate::Route;

/// How a route change is carried out by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// In-app route change; in-memory state survives.
    Client,
    /// Top-level reload; every in-memory cache is discarded.
    FullReload,
}

/// Host capability for leaving the current page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route, mode: NavigationMode);
}
