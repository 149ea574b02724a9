use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::{Context, Result};

/// SigningCredential is implemented by credential types used for signing.
pub trait SigningCredential: Clone + Send + Sync + Unpin + 'static {
    /// Check if the credential is still usable.
    ///
    /// Schemes that never expire their credentials may simply return `true`.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential loads a credential from somewhere: the environment, a
/// static value, or a remote service.
#[async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load a credential, returning `None` when this source has nothing.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is implemented by scheme-specific signers.
#[async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Sign the request in place.
    ///
    /// `expires_in` is the validity window the resulting signature should
    /// declare; signers fall back to their scheme default when it is `None`.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()>;
}

/// A chain of credential providers, tried in order.
///
/// The first provider that yields a credential wins. Providers that error are
/// logged and skipped, so a broken source never blocks the ones after it.
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait]
impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => return Ok(Some(cred)),
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}
