use super::Params;
use crate::{Error, Result};
use md5::{Digest, Md5};

/// Field name the signature is sent under.
pub const SIGN_FIELD: &str = "sign";

/// Compute the request signature for `params`.
///
/// Fields are joined as `key=value` in ascending key order with the value
/// URL-encoded, `&app_key=<secret>` is appended, and the MD5 digest of the
/// result is returned as uppercase hex.
pub fn sign(params: &Params, app_key: &str) -> Result<String> {
    if app_key.is_empty() {
        return Err(Error::Configuration(
            "app_key must not be empty when signing".to_string(),
        ));
    }

    let digest = Md5::digest(canonical_string(params, app_key).as_bytes());
    Ok(hex::encode_upper(digest))
}

/// The exact string that gets hashed.
pub fn canonical_string(params: &Params, app_key: &str) -> String {
    let mut terms: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, url_encode(&value.to_string())))
        .collect();
    terms.push(format!("app_key={}", app_key));
    terms.join("&")
}

/// Form-style URL encoding with uppercase escapes.
///
/// Alphanumerics and `-_.` pass through, a space becomes `+`, everything else
/// is percent-encoded byte by byte.
pub fn url_encode(value: &str) -> String {
    urlencoding::encode(value)
        .replace('~', "%7E")
        .replace("%20", "+")
}
