use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backends the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// Any other backend, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the vendor API associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8001".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves an asset path returned by the backend (e.g. `/uploads/a.png`)
    /// against the base URL. Absolute URLs are returned untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.api_url(), path.trim_start_matches('/'))
    }

    /// Picks the environment from, in order: an explicit `--api-url`, the
    /// `KIAKART_ENVIRONMENT` variable, the URL saved in the config file.
    pub fn resolve(cli_url: Option<&str>, env_var: Option<&str>, saved_url: Option<&str>) -> Self {
        [cli_url, env_var, saved_url]
            .into_iter()
            .flatten()
            .find_map(|candidate| candidate.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_urls() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://vendors.example.com/".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "https://vendors.example.com".to_string()
            })
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn resolve_prefers_cli_then_env_then_saved() {
        let env = Environment::resolve(
            Some("http://cli:1"),
            Some("http://env:2"),
            Some("http://saved:3"),
        );
        assert_eq!(env.api_url(), "http://cli:1");

        let env = Environment::resolve(None, Some("garbage"), Some("http://saved:3"));
        assert_eq!(env.api_url(), "http://saved:3");

        assert_eq!(Environment::resolve(None, None, None), Environment::Local);
    }

    #[test]
    // Relative upload paths are joined onto the base URL exactly once.
    fn asset_url_joins_relative_paths() {
        let env = Environment::Custom {
            api_url: "http://host:8001".to_string(),
        };
        assert_eq!(
            env.asset_url("/uploads/abc.png"),
            "http://host:8001/uploads/abc.png"
        );
        assert_eq!(
            env.asset_url("uploads/abc.png"),
            "http://host:8001/uploads/abc.png"
        );
        assert_eq!(
            env.asset_url("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }
}
