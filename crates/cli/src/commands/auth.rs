//! Login and logout commands.

use mw_backoffice::AppState;

use super::CliError;

pub async fn login(state: &AppState, email: &str, password: &str) -> Result<(), CliError> {
    match state.auth().login(email, password).await? {
        Some(seller) => {
            println!("Signed in as {} <{}>", seller.name, seller.email);
            Ok(())
        }
        None => Err(CliError::invalid(
            "credentials",
            "email or password is wrong, or the account is deactivated",
        )),
    }
}

pub fn logout(state: &AppState) {
    state.auth().logout();
    println!("Signed out.");
}
