use async_trait::async_trait;
use bcesign_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider serves a fixed credential pair.
///
/// Useful when keys arrive through application configuration rather than the
/// environment, and in tests.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new provider with the given keys.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            credential: Credential::new(
                access_key_id.to_string(),
                secret_access_key.to_string(),
            ),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
