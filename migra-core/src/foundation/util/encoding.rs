use crate::foundation::{CoordinatorError, Hash32};

pub fn decode_hex(s: &str) -> Result<Vec<u8>, CoordinatorError> {
    hex::decode(s).map_err(|e| e.into())
}

pub fn parse_hex_32bytes(s: &str) -> Result<Hash32, CoordinatorError> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    let bytes = decode_hex(trimmed)?;
    let array: Hash32 = bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| CoordinatorError::Codec(format!("expected 32 bytes, got {}", bytes.len())))?;
    Ok(array)
}
