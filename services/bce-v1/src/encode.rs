//! BCE percent encoding.
//!
//! The scheme encodes text byte-wise as UTF-8: every byte outside the
//! unreserved set (`A-Z a-z 0-9 - . _ ~`) becomes an uppercase `%XX` triplet.
//! Paths are encoded with `/` left alone; everything else escapes it.

use percent_encoding::utf8_percent_encode;

use crate::constants::{BCE_URI_ENCODE_SET, BCE_URI_ENCODE_SET_KEEP_SLASH};

/// Percent encode text with the BCE safe set.
///
/// With `except_slash`, `/` passes through unescaped, which is how request
/// paths are encoded.
pub fn percent_quote(text: &str, except_slash: bool) -> String {
    let set = if except_slash {
        &BCE_URI_ENCODE_SET_KEEP_SLASH
    } else {
        &BCE_URI_ENCODE_SET
    };

    utf8_percent_encode(text, set).to_string()
}

/// Encode (key, value) pairs as `quote(k)=quote(v)` joined with `&`.
///
/// An empty value still produces a trailing `=`. With `sort`, the *encoded*
/// pair strings are ordered lexicographically before joining; sorting after
/// encoding matters when a raw key is a prefix of another, since `%` compares
/// below most unescaped bytes.
pub fn percent_encode_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    sort: bool,
    except_slash: bool,
) -> String {
    let mut encoded: Vec<String> = pairs
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_quote(k, except_slash),
                percent_quote(v, except_slash)
            )
        })
        .collect();

    if sort {
        encoded.sort();
    }

    encoded.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_quote_reserved() {
        assert_eq!(percent_quote("a b/c", false), "a%20b%2Fc");
        assert_eq!(percent_quote("a b/c", true), "a%20b/c");
    }

    #[test]
    fn test_percent_quote_unreserved_passthrough() {
        assert_eq!(percent_quote("AZaz09-._~", false), "AZaz09-._~");
    }

    #[test]
    fn test_percent_quote_multi_byte() {
        // Two CJK characters, three UTF-8 bytes each: six uppercase triplets.
        assert_eq!(percent_quote("测试", false), "%E6%B5%8B%E8%AF%95");
    }

    #[test]
    fn test_percent_quote_is_deterministic() {
        let input = "mixed 测试/input~";
        assert_eq!(percent_quote(input, false), percent_quote(input, false));
    }

    #[test]
    fn test_percent_encode_pairs_sorted() {
        let pairs = vec![("b", "2"), ("a", "1")];
        assert_eq!(
            percent_encode_pairs(pairs.iter().copied(), true, false),
            "a=1&b=2"
        );
    }

    #[test]
    fn test_percent_encode_pairs_preserves_order_unsorted() {
        let pairs = vec![("b", "2"), ("a", "1")];
        assert_eq!(
            percent_encode_pairs(pairs.iter().copied(), false, false),
            "b=2&a=1"
        );
    }

    #[test]
    fn test_percent_encode_pairs_sorts_after_encoding() {
        // Raw order would be "a" < "a b", but "a%20b=2" < "a=1" once encoded
        // because '%' compares below '='.
        let pairs = vec![("a", "1"), ("a b", "2")];
        assert_eq!(
            percent_encode_pairs(pairs.iter().copied(), true, false),
            "a%20b=2&a=1"
        );
    }

    #[test]
    fn test_percent_encode_pairs_empty_value() {
        let pairs = vec![("acl", "")];
        assert_eq!(percent_encode_pairs(pairs.iter().copied(), false, false), "acl=");
    }

    #[test]
    fn test_percent_encode_pairs_empty_input() {
        assert_eq!(
            percent_encode_pairs(std::iter::empty::<(&str, &str)>(), true, false),
            ""
        );
    }
}
