//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a string when formatting it for debug output.
///
/// Short strings are hidden entirely; longer ones keep their first and last
/// three characters so different secrets stay distinguishable in logs without
/// being leaked.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or(""))
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("EMPTY");
        }
        if self.0.chars().count() < 12 {
            return f.write_str("***");
        }

        // Boundaries are taken per character so a multi-byte key is never
        // split inside a code point.
        let head = self.0.char_indices().nth(3).map(|(at, _)| at);
        let tail = self.0.char_indices().nth_back(2).map(|(at, _)| at);
        match (head, tail) {
            (Some(head), Some(tail)) => {
                f.write_str(&self.0[..head])?;
                f.write_str("***")?;
                f.write_str(&self.0[tail..])
            }
            _ => f.write_str("***"),
        }
    }
}
