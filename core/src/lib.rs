//! Core components for BCE request signing.
//!
//! This crate carries everything that is not specific to the auth scheme
//! itself: the [`Context`] that abstracts environment access, the
//! [`SigningRequest`] view over an [`http::request::Parts`], the traits that
//! connect credential loading ([`ProvideCredential`]) with request signing
//! ([`SignRequest`]), and the [`Signer`] that orchestrates both.
//!
//! The actual BCE auth v1 algorithm lives in the `bcesign-bce-v1` crate.
//!
//! ## Example
//!
//! ```no_run
//! use bcesign_core::{Context, ProvideCredential, SignRequest, Signer, SigningCredential};
//! use async_trait::async_trait;
//! use std::time::Duration;
//!
//! #[derive(Clone)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         true
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(
//!         &self,
//!         _: &Context,
//!     ) -> bcesign_core::Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "ak".to_string(),
//!             secret: "sk".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _req: &mut http::request::Parts,
//!         _cred: Option<&Self::Credential>,
//!         _expires_in: Option<Duration>,
//!     ) -> bcesign_core::Result<()> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> bcesign_core::Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MySigner);
//!
//! let (mut parts, _body) = http::Request::get("https://example.com")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts();
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
