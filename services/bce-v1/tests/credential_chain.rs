//! Integration tests for ProvideCredentialChain with BCE credentials.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bcesign_bce_v1::{Credential, EnvCredentialProvider};
use bcesign_core::{Context, ProvideCredential, ProvideCredentialChain, StaticEnv};

/// Mock provider that tracks how many times it was called.
#[derive(Debug)]
struct CountingProvider {
    name: String,
    return_credential: bool,
    call_count: Arc<std::sync::Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> bcesign_core::Result<Option<Self::Credential>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if self.return_credential {
            Ok(Some(Credential::new(
                format!("{}_key", self.name),
                format!("{}_secret", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = Context::new();

    let count1 = Arc::new(std::sync::Mutex::new(0));
    let count2 = Arc::new(std::sync::Mutex::new(0));
    let count3 = Arc::new(std::sync::Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: true,
            call_count: count2.clone(),
        })
        .push(CountingProvider {
            name: "provider3".to_string(),
            return_credential: true,
            call_count: count3.clone(),
        });

    let result = chain.provide_credential(&ctx).await.unwrap();
    let cred = result.expect("credential must be loaded");
    assert_eq!(cred.access_key_id, "provider2_key");
    assert_eq!(cred.secret_access_key, "provider2_secret");

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    // The third provider is never reached.
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_chain_with_env_provider() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("BCE_ACCESS_KEY_ID".to_string(), "test_key".to_string()),
            ("BCE_SECRET_ACCESS_KEY".to_string(), "test_secret".to_string()),
        ]),
    });

    let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

    let result = chain.provide_credential(&ctx).await.unwrap();
    let cred = result.expect("credential must be loaded");
    assert_eq!(cred.access_key_id, "test_key");
    assert_eq!(cred.secret_access_key, "test_secret");
}

#[tokio::test]
async fn test_empty_chain_returns_none() {
    let ctx = Context::new();
    let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = Context::new();

    let count1 = Arc::new(std::sync::Mutex::new(0));
    let count2 = Arc::new(std::sync::Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: false,
            call_count: count2.clone(),
        });

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
}
