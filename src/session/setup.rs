//! Session setup and initialization

use crate::api::{VendorApi, VendorClient};
use crate::environment::Environment;
use crate::session::Session;
use crate::state::AppState;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything the TUI needs to start.
pub struct SessionData {
    pub api: Arc<dyn VendorApi>,
    pub state: AppState,
}

/// Builds the HTTP client and the initial application state.
///
/// A token saved by a previous run is not checked here; the UI loop confirms
/// it with a profile fetch while the splash screen is up.
pub fn setup_session(
    environment: Environment,
    config_path: PathBuf,
) -> Result<SessionData, Box<dyn Error>> {
    let client = VendorClient::new(environment.clone())?;
    log::debug!("using backend {:?}", environment);

    let state = AppState::new(Session::new(config_path), environment);
    Ok(SessionData {
        api: Arc::new(client),
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::view::View;
    use tempfile::tempdir;

    #[test]
    fn starts_on_login_and_offers_restore() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("saved".to_string(), None).save(&path).unwrap();

        let data = setup_session(Environment::Local, path).unwrap();
        assert_eq!(data.state.view(), &View::Login);
        assert_eq!(data.api.token(), None);
        assert_eq!(data.state.restore().len(), 1);
    }
}
