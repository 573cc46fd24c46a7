//! Authentication state machine
//!
//! `Anonymous -> Authenticating -> Authenticated`, with every failure and
//! logout falling back to `Anonymous`. The token is mirrored to the config
//! file so it survives restarts.

use crate::config::Config;
use crate::environment::Environment;
use crate::models::Vendor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No token held.
    Anonymous,
    /// Login, registration or a startup profile check is in flight.
    Authenticating,
    /// Token and profile present.
    Authenticated { token: String, vendor: Vendor },
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
    config_path: PathBuf,
}

impl Session {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            state: SessionState::Anonymous,
            config_path: config_path.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn is_authenticating(&self) -> bool {
        self.state == SessionState::Authenticating
    }

    pub fn vendor(&self) -> Option<&Vendor> {
        match &self.state {
            SessionState::Authenticated { vendor, .. } => Some(vendor),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Token saved by a previous run, if any.
    pub fn persisted_token(&self) -> Option<String> {
        Config::load_or_default(&self.config_path)
            .ok()
            .and_then(|config| config.token().map(str::to_string))
    }

    pub fn begin_authentication(&mut self) {
        self.state = SessionState::Authenticating;
    }

    /// Login or registration succeeded. The session is authenticated even when
    /// persisting the token fails; the error is returned for reporting.
    pub fn authenticated(&mut self, token: String, vendor: Vendor) -> Result<(), std::io::Error> {
        let persisted = self.persist(&token);
        self.state = SessionState::Authenticated { token, vendor };
        persisted
    }

    /// A persisted token was confirmed by a profile fetch.
    pub fn resume(&mut self, token: String, vendor: Vendor) {
        self.state = SessionState::Authenticated { token, vendor };
    }

    /// Login or registration was rejected.
    pub fn fail_authentication(&mut self) {
        self.state = SessionState::Anonymous;
    }

    /// The token stopped being accepted; forget it everywhere.
    pub fn expire(&mut self) -> Result<(), std::io::Error> {
        self.state = SessionState::Anonymous;
        Config::clear_session(&self.config_path)
    }

    pub fn logout(&mut self) -> Result<(), std::io::Error> {
        self.expire()
    }

    /// Saves the backend the session belongs to, so later runs reach the
    /// same server. `Local` is the default and is stored as no URL.
    pub fn remember_backend(&self, environment: &Environment) -> Result<(), std::io::Error> {
        let api_url = match environment {
            Environment::Local => None,
            Environment::Custom { api_url } => Some(api_url.clone()),
        };
        let mut config = Config::load_or_default(&self.config_path).unwrap_or_default();
        if config.api_url == api_url {
            return Ok(());
        }
        config.api_url = api_url;
        config.save(&self.config_path)
    }

    fn persist(&self, token: &str) -> Result<(), std::io::Error> {
        let mut config = Config::load_or_default(&self.config_path).unwrap_or_default();
        config.access_token = token.to_string();
        config.save(&self.config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn vendor(name: &str) -> Vendor {
        Vendor {
            name: name.to_string(),
            ..Vendor::default()
        }
    }

    #[test]
    fn authentication_persists_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut session = Session::new(&path);

        session.begin_authentication();
        assert!(session.is_authenticating());

        session.authenticated("t1".to_string(), vendor("A")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.vendor().map(|v| v.name.as_str()), Some("A"));
        assert_eq!(session.persisted_token().as_deref(), Some("t1"));
    }

    #[test]
    fn failed_authentication_returns_to_anonymous() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path().join("config.json"));
        session.begin_authentication();
        session.fail_authentication();
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.persisted_token(), None);
    }

    #[test]
    fn logout_clears_persisted_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut session = Session::new(&path);
        session.authenticated("t1".to_string(), vendor("A")).unwrap();

        session.logout().unwrap();

        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.persisted_token(), None);
        assert!(session.vendor().is_none());
    }

    #[test]
    fn persisting_keeps_saved_api_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new(String::new(), Some("http://saved".to_string()))
            .save(&path)
            .unwrap();

        let mut session = Session::new(&path);
        session.authenticated("t2".to_string(), vendor("B")).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.token(), Some("t2"));
        assert_eq!(config.api_url.as_deref(), Some("http://saved"));
    }

    #[test]
    fn custom_backend_is_remembered() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut session = Session::new(&path);
        session.authenticated("t1".to_string(), vendor("A")).unwrap();
        session
            .remember_backend(&Environment::Custom {
                api_url: "https://vendors.example.com".to_string(),
            })
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://vendors.example.com"));
        assert_eq!(config.token(), Some("t1"));

        session.remember_backend(&Environment::Local).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap().api_url, None);
    }

    #[test]
    fn session_can_reauthenticate_after_logout() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path().join("config.json"));
        session.authenticated("t1".to_string(), vendor("A")).unwrap();
        session.logout().unwrap();
        session.begin_authentication();
        session.authenticated("t3".to_string(), vendor("A")).unwrap();
        assert_eq!(session.persisted_token().as_deref(), Some("t3"));
    }
}
