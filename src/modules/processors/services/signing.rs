use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Hex-encoded HMAC-SHA256 of `message` under `key`
pub fn hmac_sha256_hex(key: &str, message: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| AppError::Configuration(format!("Invalid signing key: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Concatenate values, each prefixed with its byte length ("3abc5hello")
pub fn length_prefixed<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values
        .into_iter()
        .map(|v| format!("{}{}", v.len(), v))
        .collect()
}

/// `k=v&k=v` with percent-encoded keys and values, in the given order
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
