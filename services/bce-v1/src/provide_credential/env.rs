use async_trait::async_trait;
use bcesign_core::{Context, ProvideCredential, Result};

use crate::constants::*;
use crate::Credential;

/// EnvCredentialProvider loads BCE credentials from environment variables.
///
/// This provider looks for:
/// - `BCE_ACCESS_KEY_ID`: the access key id
/// - `BCE_SECRET_ACCESS_KEY`: the secret access key
///
/// Both must be present; otherwise nothing is returned.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(BCE_ACCESS_KEY_ID), envs.get(BCE_SECRET_ACCESS_KEY)) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak.clone(), sk.clone()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bcesign_core::StaticEnv;

    use super::*;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (BCE_ACCESS_KEY_ID.to_string(), "test_access_key".to_string()),
                (
                    BCE_SECRET_ACCESS_KEY.to_string(),
                    "test_secret_key".to_string(),
                ),
            ]),
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        let cred = cred.expect("credential must be loaded");
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        // Only the access key id: not enough.
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                BCE_ACCESS_KEY_ID.to_string(),
                "test_access_key".to_string(),
            )]),
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
