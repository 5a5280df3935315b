//! Account identifier codec.
//!
//! The wire form is RFC 4648 base32 (no padding) over the 32-byte public key
//! followed by a 4-byte checksum (the trailing bytes of SHA-512/256 of the
//! key). Decoding verifies the checksum; the round trip is lossless.

use crate::foundation::{
    AppId, CoordinatorError, ADDRESS_CHECKSUM_SIZE, ADDRESS_STRING_LENGTH, APPLICATION_ADDRESS_PREFIX, PUBKEY_SIZE,
    REGISTRY_KEY_SIZE,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha512_256};
use std::fmt;
use std::str::FromStr;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Binary account identifier, used directly as a registry key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; PUBKEY_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; PUBKEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_SIZE] {
        &self.0
    }

    /// Interpret a raw registry key as an account identifier.
    pub fn from_registry_key(key: &[u8]) -> Result<Self, CoordinatorError> {
        let bytes: [u8; REGISTRY_KEY_SIZE] = key
            .try_into()
            .map_err(|_| CoordinatorError::Codec(format!("registry key must be {REGISTRY_KEY_SIZE} bytes, got {}", key.len())))?;
        Ok(Self(bytes))
    }

    fn checksum(key: &[u8]) -> [u8; ADDRESS_CHECKSUM_SIZE] {
        let digest = Sha512_256::digest(key);
        let mut checksum = [0u8; ADDRESS_CHECKSUM_SIZE];
        checksum.copy_from_slice(&digest[digest.len() - ADDRESS_CHECKSUM_SIZE..]);
        checksum
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = [0u8; PUBKEY_SIZE + ADDRESS_CHECKSUM_SIZE];
        payload[..PUBKEY_SIZE].copy_from_slice(&self.0);
        payload[PUBKEY_SIZE..].copy_from_slice(&Self::checksum(&self.0));
        f.write_str(&encode_base32(&payload))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = CoordinatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ADDRESS_STRING_LENGTH {
            return Err(CoordinatorError::Codec(format!(
                "address must be {ADDRESS_STRING_LENGTH} characters, got {}",
                s.len()
            )));
        }
        let decoded = decode_base32(s)?;
        let (key, stored) = decoded.split_at(PUBKEY_SIZE);
        if stored != Self::checksum(key) {
            return Err(CoordinatorError::Codec("address checksum mismatch".to_string()));
        }
        let mut bytes = [0u8; PUBKEY_SIZE];
        bytes.copy_from_slice(key);
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; PUBKEY_SIZE]>::deserialize(deserializer)?;
            Ok(Self(bytes))
        }
    }
}

/// Funding account derived from an application identifier.
pub fn application_address(application: AppId) -> Address {
    let mut hasher = Sha512_256::new();
    hasher.update(APPLICATION_ADDRESS_PREFIX);
    hasher.update(application.0.to_be_bytes());
    Address(hasher.finalize().into())
}

fn encode_base32(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((acc >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((acc << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

fn decode_base32(input: &str) -> Result<Vec<u8>, CoordinatorError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for ch in input.bytes() {
        let value = ALPHABET
            .iter()
            .position(|&c| c == ch)
            .ok_or_else(|| CoordinatorError::Codec(format!("invalid address character {:?}", ch as char)))?;
        acc = (acc << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    Ok(out)
}
