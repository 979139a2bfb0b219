//! OBS credential loading from the process environment
//!
//! Credentials live only for the duration of client construction and are
//! never persisted or printed. Absence of either variable is not an error;
//! the caller checks [`Credentials::is_empty`] before proceeding.

/// Default OBS API endpoint used when credentials are present
pub const DEFAULT_API_URL: &str = "https://api.opensuse.org/";

/// Environment variable holding the OBS account name
pub const USERNAME_VAR: &str = "OBS_USERNAME";

/// Environment variable holding the OBS account password
pub const PASSWORD_VAR: &str = "OBS_PASSWORD";

/// OBS API credentials assembled from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub api_url: String,
}

impl Credentials {
    /// Load credentials from `OBS_USERNAME` and `OBS_PASSWORD`.
    ///
    /// If either variable is unset or empty, every field of the returned
    /// value is empty. Only when both are present is the fixed default API
    /// endpoint filled in.
    pub fn from_env() -> Self {
        let username = std::env::var(USERNAME_VAR).unwrap_or_default();
        if username.is_empty() {
            return Self::default();
        }

        let password = std::env::var(PASSWORD_VAR).unwrap_or_default();
        if password.is_empty() {
            return Self::default();
        }

        Self {
            username,
            password,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// True when no usable credentials were found in the environment
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}
