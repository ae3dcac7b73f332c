//! StrKey encoding of ledger keys.
//!
//! A StrKey is `version byte + payload + CRC16-XModem (little-endian)`,
//! written as unpadded RFC 4648 base32. The version byte selects the first
//! character of the result, so account addresses always start with `G`.
//!
//! ```
//! use ledger::strkey::{self, VersionByte};
//!
//! let address = strkey::encode(VersionByte::AccountId, &[0u8; 32]).unwrap();
//! assert_eq!(address, "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF");
//! ```

use crc::{CRC_16_XMODEM, Crc};
use data_encoding::BASE32_NOPAD;
use thiserror::Error;

const CHECKSUM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Length of an ed25519 key payload.
pub const KEY_LEN: usize = 32;

/// Errors produced while encoding a StrKey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    #[error("unknown public key type {0}")]
    UnknownKeyType(u32),
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },
}

/// Kind of key a StrKey carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionByte {
    /// Ed25519 public key (`G...`).
    AccountId,
}

impl VersionByte {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::AccountId => 6 << 3,
        }
    }
}

/// Encodes a 32-byte key as a StrKey of the given kind.
pub fn encode(version: VersionByte, payload: &[u8]) -> Result<String, StrKeyError> {
    if payload.len() != KEY_LEN {
        return Err(StrKeyError::InvalidPayloadLength {
            expected: KEY_LEN,
            actual: payload.len(),
        });
    }

    let mut raw = Vec::with_capacity(KEY_LEN + 3);
    raw.push(version.as_byte());
    raw.extend_from_slice(payload);
    let crc = CHECKSUM.checksum(&raw);
    raw.extend_from_slice(&crc.to_le_bytes());

    Ok(BASE32_NOPAD.encode(&raw))
}
