use std::sync::Arc;

use async_trait::async_trait;
use bcesign_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::Credential;

/// ConfigCredentialProvider loads credentials from a [`Config`].
///
/// Fields left unset in the config are filled from the environment before the
/// credential is built; both keys must resolve for a credential to be
/// returned.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider backed by the given config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(ak), Some(sk)) = (&config.access_key_id, &config.secret_access_key) {
            return Ok(Some(Credential::new(ak.clone(), sk.clone())));
        }

        Ok(None)
    }
}
