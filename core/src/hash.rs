//! Hash related utils.

use std::io::{Read, Seek, SeekFrom};

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use md5::Md5;
use sha2::Digest;
use sha2::Sha256;

/// Chunk size used when digesting a streamed body.
const MD5_CHUNK_SIZE: usize = 8192;

/// Base64 encode.
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` to
/// avoid an extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Base64 encoded MD5 digest, as carried by the `content-md5` header.
pub fn base64_md5(content: &[u8]) -> String {
    base64_encode(Md5::digest(content).as_slice())
}

/// Base64 encoded MD5 digest of a seekable stream.
///
/// Reads the stream to its end in bounded chunks, then seeks it back to the
/// start so the body can still be transmitted unchanged by the caller.
pub fn base64_md5_read(body: &mut (impl Read + Seek)) -> std::io::Result<String> {
    let mut md5 = Md5::new();
    let mut buf = [0u8; MD5_CHUNK_SIZE];
    loop {
        let n = body.read(&mut buf)?;
        if n == 0 {
            break;
        }
        md5.update(&buf[..n]);
    }
    body.seek(SeekFrom::Start(0))?;

    Ok(base64_encode(md5.finalize().as_slice()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_base64_md5() {
        // Reference digest for "hello world".
        assert_eq!(base64_md5(b"hello world"), "XrY7u+Ae7tCTyyK7j1rNww==");
        assert_eq!(base64_md5(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_base64_md5_read_matches_slice_digest() {
        let content = b"some streamed body content".to_vec();
        let mut cursor = Cursor::new(content.clone());

        let digest = base64_md5_read(&mut cursor).expect("digest must succeed");
        assert_eq!(digest, base64_md5(&content));
    }

    #[test]
    fn test_base64_md5_read_rewinds_stream() {
        let content = vec![42u8; MD5_CHUNK_SIZE * 3 + 17];
        let mut cursor = Cursor::new(content.clone());

        base64_md5_read(&mut cursor).expect("digest must succeed");

        let mut replay = Vec::new();
        cursor.read_to_end(&mut replay).expect("read must succeed");
        assert_eq!(replay, content);
    }

    #[test]
    fn test_hex_hmac_sha256() {
        // RFC 4231 test case 2.
        assert_eq!(
            hex_hmac_sha256(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hex_hmac_sha256_empty_key() {
        // Empty keys are accepted; HMAC pads them to the block size.
        assert_eq!(
            hex_hmac_sha256(b"", b"content"),
            hex_hmac_sha256(&[0u8; 64], b"content")
        );
    }
}
