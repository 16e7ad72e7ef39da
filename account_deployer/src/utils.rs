//!
//! The account deployer utils.
//!

use std::path::Path;
use std::time::Duration;

use sha3::Digest;

/// The placeholder of serialized secrets.
pub const REDACTED: &str = "<redacted>";

///
/// Returns the `keccak256` hash of the data.
///
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    sha3::Keccak256::digest(data).into()
}

///
/// Formats the address with the EIP-55 mixed-case checksum.
///
pub fn address_as_checksummed(address: &web3::types::Address) -> String {
    let lowercase = hex::encode(address.as_bytes());
    let hash = hex::encode(self::keccak256(lowercase.as_bytes()));

    let mut result = String::with_capacity(2 + lowercase.len());
    result.push_str("0x");
    for (character, nibble) in lowercase.chars().zip(hash.chars()) {
        if character.is_ascii_alphabetic() && nibble >= '8' {
            result.push(character.to_ascii_uppercase());
        } else {
            result.push(character);
        }
    }
    result
}

///
/// Decodes a hexadecimal string with an optional `0x` prefix.
///
pub fn decode_hex(value: &str) -> anyhow::Result<Vec<u8>> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(value).map_err(|error| anyhow::anyhow!("Invalid hexadecimal `{value}`: {error}"))
}

///
/// Normalizes `path` by replacing possible backslashes with ordinary slashes, and returns a string.
///
pub fn path_to_string_normalized(path: &Path) -> String {
    path.to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR_STR, "/")
}

///
/// Serializes a list of secrets as placeholders.
///
#[allow(clippy::ptr_arg)]
pub fn serialize_redacted_list<S>(values: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(values.iter().map(|_| REDACTED))
}

///
/// Serializes an optional secret as a placeholder.
///
pub fn serialize_redacted_option<S>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}

///
/// Serializes an endpoint URL with the provider key in its last path segment redacted.
///
/// URLs without a path, such as local nodes, are kept as is.
///
pub fn serialize_redacted_url<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let redacted = match value.split_once("://") {
        Some((_, rest)) => match rest.split_once('/') {
            Some((_, path)) if !path.is_empty() => match value.rsplit_once('/') {
                Some((prefix, key)) if !key.is_empty() => format!("{prefix}/{REDACTED}"),
                _ => value.to_owned(),
            },
            _ => value.to_owned(),
        },
        None => value.to_owned(),
    };
    serializer.serialize_str(redacted.as_str())
}

///
/// Serializes a duration as milliseconds.
///
pub fn serialize_duration_millis<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(value.as_millis() as u64)
}
