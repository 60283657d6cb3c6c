use bs58;
use solana_pubkey::Pubkey;

use super::{error::IndexerError, types::Hash};

pub trait Base58Conversions {
    fn to_base58(&self) -> String;
    fn from_base58(s: &str) -> Result<Self, IndexerError>
    where
        Self: Sized;
}

impl Base58Conversions for [u8; 32] {
    fn to_base58(&self) -> String {
        bs58::encode(self).into_string()
    }

    fn from_base58(s: &str) -> Result<Self, IndexerError> {
        decode_base58_to_fixed_array("value", s)
    }
}

pub fn decode_base58_to_fixed_array<const N: usize>(
    field: &str,
    input: &str,
) -> Result<[u8; N], IndexerError> {
    let mut buffer = [0u8; N];
    let decoded_len = bs58::decode(input)
        .onto(&mut buffer)
        .map_err(|e| IndexerError::base58_decode_error(field, e))?;

    if decoded_len != N {
        return Err(IndexerError::base58_decode_error(
            field,
            format!("expected {} bytes, decoded {}", N, decoded_len),
        ));
    }

    Ok(buffer)
}

pub fn decode_base58_to_pubkey(field: &str, input: &str) -> Result<Pubkey, IndexerError> {
    decode_base58_to_fixed_array(field, input).map(Pubkey::new_from_array)
}

/// Uncompressed assets report empty strings for their compression fields.
pub fn decode_base58_or_default<const N: usize>(
    field: &str,
    input: &str,
) -> Result<[u8; N], IndexerError> {
    if input.is_empty() {
        return Ok([0u8; N]);
    }
    decode_base58_to_fixed_array(field, input)
}

pub fn decode_base58_hashes(field: &str, values: &[String]) -> Result<Vec<Hash>, IndexerError> {
    values
        .iter()
        .map(|value| decode_base58_to_fixed_array(field, value))
        .collect()
}
