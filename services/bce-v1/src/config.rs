use std::fmt::{Debug, Formatter};

use bcesign_core::{utils::Redact, Context};

use crate::constants::*;

/// Config carries the configuration for BCE signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `BCE_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `BCE_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id.
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key.
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Fill unset fields from the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(BCE_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BCE_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bcesign_core::StaticEnv;

    use super::*;

    #[test]
    fn test_from_env_fills_unset_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (BCE_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (BCE_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let config = Config::new().from_env(&ctx);
        assert_eq!(config.access_key_id.as_deref(), Some("env_ak"));
        assert_eq!(config.secret_access_key.as_deref(), Some("env_sk"));
    }

    #[test]
    fn test_from_env_keeps_explicit_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(BCE_ACCESS_KEY_ID.to_string(), "env_ak".to_string())]),
        });

        let config = Config::new().with_access_key_id("explicit_ak").from_env(&ctx);
        assert_eq!(config.access_key_id.as_deref(), Some("explicit_ak"));
        assert_eq!(config.secret_access_key, None);
    }
}
