use std::collections::{HashMap, HashSet};
use std::time::Duration;

use once_cell::sync::Lazy;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers significant to the signing policy.
pub const CONTENT_MD5: &str = "content-md5";
pub const X_BCE_HEADER_PREFIX: &str = "x-bce-";

// Env values used to load credentials.
pub const BCE_ACCESS_KEY_ID: &str = "BCE_ACCESS_KEY_ID";
pub const BCE_SECRET_ACCESS_KEY: &str = "BCE_SECRET_ACCESS_KEY";

/// Scheme identifier leading every authorization value.
pub const BCE_AUTH_VERSION: &str = "bce-auth-v1";

/// Validity window declared by the signature when the caller picks none.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(60);

/// Content type used when nothing can be derived from the request path.
///
/// The verifying side matches this exact (misspelled) literal.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octstream";

/// AsciiSet for BCE percent encoding.
///
/// Every byte except the unreserved characters 'A'-'Z', 'a'-'z', '0'-'9',
/// '-', '.', '_', and '~' is encoded as an uppercase `%XX` triplet.
pub static BCE_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Same set with '/' left alone, used for encoding whole paths.
pub static BCE_URI_ENCODE_SET_KEEP_SLASH: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Headers folded into the signature whenever present and non-empty.
///
/// Any `x-bce-*` header is signed as well, see `sign_request::needs_to_sign`.
pub static HEADERS_TO_SIGN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["host", "content-length", "content-type", "content-md5"])
});

/// Content types derived from well-known path extensions.
pub static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bin", "application/octet-stream"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("gif", "image/gif"),
        ("gz", "application/gzip"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("jpeg", "image/jpeg"),
        ("jpg", "image/jpeg"),
        ("js", "text/javascript"),
        ("json", "application/json"),
        ("mp3", "audio/mpeg"),
        ("mp4", "video/mp4"),
        ("pdf", "application/pdf"),
        ("png", "image/png"),
        ("svg", "image/svg+xml"),
        ("tar", "application/x-tar"),
        ("txt", "text/plain"),
        ("webp", "image/webp"),
        ("xml", "application/xml"),
        ("zip", "application/zip"),
    ])
});
