//! BCE auth v1 signer.
//!
//! Implements the `bce-auth-v1` authorization scheme used by Baidu Cloud
//! services: a canonical request is built from the method, path, query, and a
//! policy-selected set of headers, then signed with a two-stage HMAC-SHA256
//! chain. The resulting value is attached as the `Authorization` header.
//!
//! ```no_run
//! use bcesign_bce_v1::{RequestSigner, StaticCredentialProvider};
//! use bcesign_core::{Context, Signer};
//!
//! # async fn example() -> bcesign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key_id", "secret_access_key"),
//!     RequestSigner::new(),
//! );
//!
//! let (mut parts, _body) = http::Request::get("http://bj.bcebos.com/v1/bucket/object")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts();
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

pub mod encode;

mod provide_credential;
pub use provide_credential::ConfigCredentialProvider;
pub use provide_credential::DefaultCredentialProvider;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::derived_headers;
pub use sign_request::RequestSigner;

mod constants;
