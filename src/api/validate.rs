//! Local argument checks run before any payload is resolved or sent.

use crate::resource::decoded_len;
use crate::{Error, Result};
use std::ops::RangeInclusive;

pub const MB: usize = 1_048_576;
pub const KB_500: usize = 500 * 1024;

pub fn non_empty(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", name)));
    }
    Ok(())
}

pub fn in_range(name: &str, value: i64, range: RangeInclusive<i64>) -> Result<()> {
    if !range.contains(&value) {
        return Err(Error::Validation(format!(
            "{} must be within [{}-{}], got {}",
            name,
            range.start(),
            range.end(),
            value
        )));
    }
    Ok(())
}

pub fn one_of(name: &str, value: i64, allowed: &[i64]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(Error::Validation(format!(
            "{} must be one of {:?}, got {}",
            name, allowed, value
        )));
    }
    Ok(())
}

/// Non-empty and at most `max` UTF-8 bytes.
pub fn text_bytes(name: &str, value: &str, max: usize) -> Result<()> {
    non_empty(name, value)?;
    if value.len() > max {
        return Err(Error::Validation(format!(
            "{} must be at most {} bytes, got {}",
            name,
            max,
            value.len()
        )));
    }
    Ok(())
}

/// Decoded size of a base64 payload must stay below `limit`.
pub fn encoded_below(name: &str, encoded: &str, limit: usize) -> Result<()> {
    let size = decoded_len(encoded);
    if size >= limit {
        return Err(Error::Validation(format!(
            "{} must be smaller than {} bytes, got {}",
            name, limit, size
        )));
    }
    Ok(())
}

pub fn http_url(name: &str, value: &str) -> Result<()> {
    non_empty(name, value)?;
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(Error::Validation(format!(
            "{} must be an http(s) URL",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_inclusive() {
        assert!(in_range("cosmetic", 1, 1..=23).is_ok());
        assert!(in_range("cosmetic", 23, 1..=23).is_ok());
        assert!(in_range("cosmetic", 0, 1..=23).is_err());
        assert!(in_range("cosmetic", 24, 1..=23).is_err());
    }

    #[test]
    fn test_one_of() {
        assert!(one_of("rate", 16000, &[8000, 16000]).is_ok());
        let err = one_of("rate", 44100, &[8000, 16000]).unwrap_err();
        assert!(err.to_string().contains("44100"));
    }

    #[test]
    fn test_text_bytes_counts_utf8() {
        assert!(text_bytes("text", "你好", 6).is_ok());
        assert!(text_bytes("text", "你好", 5).is_err());
        assert!(text_bytes("text", "", 5).is_err());
    }

    #[test]
    fn test_encoded_below() {
        // "aGVsbG8=" decodes to 5 bytes
        assert!(encoded_below("image", "aGVsbG8=", 6).is_ok());
        assert!(matches!(
            encoded_below("image", "aGVsbG8=", 5),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_http_url() {
        assert!(http_url("image_url", "https://a.b/c.png").is_ok());
        assert!(http_url("image_url", "file:///etc/passwd").is_err());
        assert!(http_url("image_url", "").is_err());
    }
}
