//! BCE auth v1 request signing.

use std::time::Duration;

use async_trait::async_trait;
use bcesign_core::hash::{base64_md5, hex_hmac_sha256};
use bcesign_core::time::{format_iso8601, now, DateTime};
use bcesign_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::header;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;

use crate::constants::*;
use crate::encode::{percent_encode_pairs, percent_quote};
use crate::Credential;

/// RequestSigner that implements BCE auth v1.
///
/// The scheme derives a per-timestamp signing key from the secret key, signs
/// the canonical request with it, and attaches
/// `Authorization: bce-auth-v1/{ak}/{timestamp}/{expires}/{signed_headers}/{signature}`.
#[derive(Debug)]
pub struct RequestSigner {
    expires_in: Duration,
    time: Option<DateTime>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer with the scheme default expiry.
    pub fn new() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
            time: None,
        }
    }

    /// Change the validity window declared when a call passes no expiry.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred =
            credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);
        let expires_in = expires_in.unwrap_or(self.expires_in);

        let mut req = SigningRequest::build(parts)?;

        // The host header is always part of the signature; derive it from the
        // authority when the caller left it out.
        if req.headers.get(header::HOST).is_none() {
            req.headers
                .insert(header::HOST, req.authority.as_str().parse()?);
        }

        let (canonical_request, signed_headers) = canonical_request_string(&mut req)?;
        debug!("canonical request: {canonical_request}");

        let auth_prefix = format!(
            "{BCE_AUTH_VERSION}/{}/{}/{}",
            cred.access_key_id,
            format_iso8601(now),
            expires_in.as_secs()
        );

        // Stage one derives the signing key; stage two signs the canonical
        // request with it. The 64-char lowercase hex digest is fed into the
        // second HMAC as ASCII bytes, never decoded back to raw bytes: the
        // verifying server chains the same way, so "simplifying" this breaks
        // interop.
        let signing_key =
            hex_hmac_sha256(cred.secret_access_key.as_bytes(), auth_prefix.as_bytes());
        let signature = hex_hmac_sha256(signing_key.as_bytes(), canonical_request.as_bytes());

        req.headers.insert(header::AUTHORIZATION, {
            let mut value: HeaderValue =
                format!("{auth_prefix}/{signed_headers}/{signature}").parse()?;
            value.set_sensitive(true);

            value
        });

        req.apply(parts)
    }
}

/// Compute the headers the scheme derives for a request when they are absent:
///
/// - `host` from the URI authority,
/// - `content-type` guessed from the path extension (fallback
///   [`DEFAULT_CONTENT_TYPE`]),
/// - `content-md5` from the body, when one is given.
///
/// Only missing headers are returned; the caller decides how to merge them
/// into the request before signing. Their values feed into the signature, so
/// the transport must send them unmodified.
pub fn derived_headers(parts: &Parts, body: Option<&[u8]>) -> Result<HeaderMap> {
    let mut derived = HeaderMap::new();

    if parts.headers.get(header::HOST).is_none() {
        let authority = parts.uri.authority().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;
        derived.insert(header::HOST, authority.as_str().parse()?);
    }

    if parts.headers.get(header::CONTENT_TYPE).is_none() {
        derived.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(guess_content_type(parts.uri.path())),
        );
    }

    if let Some(body) = body {
        if parts.headers.get(CONTENT_MD5).is_none() {
            derived.insert(HeaderName::from_static(CONTENT_MD5), base64_md5(body).parse()?);
        }
    }

    Ok(derived)
}

/// Canonical form of the request:
///
/// ```text
/// METHOD + "\n" + canonical_uri + "\n" + canonical_query + "\n" + canonical_headers
/// ```
///
/// Returns the canonical request together with the `;`-joined names of the
/// headers that participate.
fn canonical_request_string(req: &mut SigningRequest) -> Result<(String, String)> {
    let canonical_uri = percent_quote(&req.path, true);
    let canonical_query = canonicalize_query(req);

    let mut headers: Vec<(String, String)> = req
        .header_last_values()?
        .into_iter()
        .filter(|(name, value)| needs_to_sign(name) && !value.trim().is_empty())
        .map(|(name, value)| {
            (
                format!(
                    "{}:{}",
                    percent_quote(name.trim(), false),
                    percent_quote(value.trim(), false)
                ),
                name,
            )
        })
        .collect();
    // Sorting the (rendered, name) tuples orders both output lists the same way.
    headers.sort();

    let signed_headers = headers
        .iter()
        .map(|(_, name)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let canonical_headers = headers
        .iter()
        .map(|(rendered, _)| rendered.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let canonical_request = format!(
        "{}\n{}\n{}\n{}",
        req.method.as_str(),
        canonical_uri,
        canonical_query,
        canonical_headers
    );

    Ok((canonical_request, signed_headers))
}

/// Encode the query into its canonical sorted form.
///
/// The signing request's own query is replaced with the encoded pairs so the
/// URI written back by `apply` carries exactly the values that were signed.
fn canonicalize_query(req: &mut SigningRequest) -> String {
    let encoded = percent_encode_pairs(
        req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        true,
        false,
    );

    req.query = req
        .query
        .iter()
        .map(|(k, v)| (percent_quote(k, false), percent_quote(v, false)))
        .collect();

    encoded
}

/// A header participates in the signature if it is one of the fixed required
/// names or carries the vendor prefix. Names arrive lowercased from the
/// header map.
fn needs_to_sign(name: &str) -> bool {
    HEADERS_TO_SIGN.contains(name) || name.starts_with(X_BCE_HEADER_PREFIX)
}

fn guess_content_type(path: &str) -> &'static str {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => MIME_TYPES
            .get(ext.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_CONTENT_TYPE),
        _ => DEFAULT_CONTENT_TYPE,
    }
}
