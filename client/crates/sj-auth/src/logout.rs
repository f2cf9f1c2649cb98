use crate::{AuthResult, CredentialStore, NavigationMode, Navigator, SiteRoutes};

/// Forget the credential and reload the site at its anonymous landing page.
///
/// The full reload throws away every cache tied to the old credential.
/// Safe to call when already signed out. The reload happens even if the
/// persisted token could not be removed; that error is returned afterwards.
pub fn logout(
    credentials: &CredentialStore,
    navigator: &dyn Navigator,
    routes: &SiteRoutes,
) -> AuthResult<()> {
    let cleared = credentials.clear();
    navigator.navigate(&routes.home(), NavigationMode::FullReload);
    cleared
}
