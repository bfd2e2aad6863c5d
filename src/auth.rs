//! Signed-in user lookup for the presentation layer

use crate::config::Config;

/// Answers "who is signed in", if anyone. Only rendering asks this;
/// scoring never does.
pub trait UserProvider {
    fn current_user(&self) -> Option<String>;
}

/// Nobody is signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl UserProvider for Anonymous {
    fn current_user(&self) -> Option<String> {
        None
    }
}

/// User name taken from the `[account]` section of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredUser {
    user: Option<String>,
}

impl ConfiguredUser {
    pub fn new(user: Option<String>) -> Self {
        Self { user }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.account.user.clone())
    }
}

impl UserProvider for ConfiguredUser {
    fn current_user(&self) -> Option<String> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_user() {
        let mut config = Config::default();
        assert!(ConfiguredUser::from_config(&config).current_user().is_none());

        config.account.user = Some("jordan".to_string());
        assert_eq!(ConfiguredUser::from_config(&config).current_user().as_deref(), Some("jordan"));
        assert!(Anonymous.current_user().is_none());
    }
}
