//! Local login commands.

use lacapke_menu::Storefront;

/// Log in as `username`.
///
/// # Errors
///
/// Returns an error for a blank username.
pub fn login(storefront: &Storefront, username: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user = storefront
        .login(username)
        .ok_or("Username must not be blank")?;
    tracing::debug!(admin = user.is_admin(), "Session started");
    Ok(())
}

/// Log out.
pub fn logout(storefront: &Storefront) {
    if storefront.current_user().is_none() {
        tracing::info!("Not logged in");
        return;
    }
    storefront.logout();
}
