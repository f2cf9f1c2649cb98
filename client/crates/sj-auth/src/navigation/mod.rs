pub(crate) mod navigator;
pub(crate) mod route;

pub use navigator::{NavigationMode, Navigator};
pub use route::{CallbackErrorCode, Route, SiteRoutes};
