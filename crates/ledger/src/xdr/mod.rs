//! Serde-based XDR encoding for ledger structures.
//!
//! This module provides a Serde `Serializer` and `Deserializer` for the
//! big-endian, 4-byte aligned encoding the ledger uses for its entries.
//!
//! # Encoding
//!
//! ```text
//! i32 / u32 / bool      4 bytes BE
//! i64 / u64             8 bytes BE
//! enum (union)          u32 variant index, then the arm (if any)
//! Option<T>             u32 0 | u32 1 + T
//! String / Vec<T>       u32 length + body, zero-padded to 4 bytes
//! [u8; N]               N bytes, zero-padded to 4 bytes
//! struct                fields in declaration order
//! ```
//!
//! # Example
//!
//! ```
//! use ledger::entry::Price;
//! use ledger::xdr;
//!
//! let price = Price { n: 3, d: 2 };
//! let bytes = xdr::to_bytes(&price).unwrap();
//! assert_eq!(bytes, [0, 0, 0, 3, 0, 0, 0, 2]);
//! assert_eq!(xdr::from_bytes::<Price>(&bytes).unwrap(), price);
//! ```

mod de;
mod error;
mod ser;

use base64::prelude::{BASE64_STANDARD, Engine};
pub use de::XdrDeserializer;
pub use error::{Error, Result};
pub use ser::XdrSerializer;
use serde::{Deserialize, Serialize};

/// Number of zero bytes needed to align `len` to 4 bytes.
pub(crate) fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Serializes a value to XDR bytes.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(64);
    value.serialize(&mut XdrSerializer::new(&mut output))?;
    Ok(output)
}

/// Deserializes a value from XDR bytes.
///
/// The whole input must be consumed; leftover bytes are an error.
pub fn from_bytes<'de, T: Deserialize<'de>>(bytes: &'de [u8]) -> Result<T> {
    let mut de = XdrDeserializer::new(bytes);
    let value = T::deserialize(&mut de)?;
    match de.remaining() {
        0 => Ok(value),
        n => Err(Error::TrailingData(n)),
    }
}

/// Serializes a value to XDR and encodes it with the standard base64 alphabet.
pub fn to_base64<T: Serialize>(value: &T) -> Result<String> {
    Ok(BASE64_STANDARD.encode(to_bytes(value)?))
}

/// Decodes standard base64 text and deserializes the XDR value inside it.
pub fn from_base64<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T> {
    let bytes = BASE64_STANDARD.decode(text.trim())?;
    from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum Shape {
        Empty,
        Code([u8; 4]),
        Named { name: String, size: i64 },
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        flag: bool,
        maybe: Option<u32>,
        shape: Shape,
        data: Vec<u8>,
    }

    #[test]
    fn test_pad_len() {
        assert_eq!(pad_len(0), 0);
        assert_eq!(pad_len(1), 3);
        assert_eq!(pad_len(4), 0);
        assert_eq!(pad_len(5), 3);
        assert_eq!(pad_len(12), 0);
    }

    #[test]
    fn test_string_is_length_prefixed_and_padded() {
        let bytes = to_bytes(&"abcde".to_string()).unwrap();
        assert_eq!(bytes, [0, 0, 0, 5, b'a', b'b', b'c', b'd', b'e', 0, 0, 0]);
    }

    #[test]
    fn test_union_discriminant_is_variant_index() {
        assert_eq!(to_bytes(&Shape::Empty).unwrap(), [0, 0, 0, 0]);
        assert_eq!(to_bytes(&Shape::Code(*b"AB\0\0")).unwrap(), [0, 0, 0, 1, b'A', b'B', 0, 0]);
    }

    #[test]
    fn test_option_encoding() {
        assert_eq!(to_bytes(&None::<u32>).unwrap(), [0, 0, 0, 0]);
        assert_eq!(to_bytes(&Some(7u32)).unwrap(), [0, 0, 0, 1, 0, 0, 0, 7]);
    }

    #[test]
    fn test_nested_value_decodes() {
        let holder = Holder {
            flag: true,
            maybe: Some(9),
            shape: Shape::Named { name: "xdr".to_string(), size: -4 },
            data: vec![1, 2, 3, 4, 5],
        };
        let bytes = to_bytes(&holder).unwrap();
        assert_eq!(bytes.len() % 4, 0);
        assert_eq!(from_bytes::<Holder>(&bytes).unwrap(), holder);
    }

    #[test]
    fn test_unknown_discriminant_rejected() {
        let err = from_bytes::<Shape>(&[0, 0, 0, 7]).unwrap_err();
        assert!(matches!(err, Error::InvalidDiscriminant { name: "Shape", value: 7 }));
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let err = from_bytes::<Option<u32>>(&[0, 0, 0, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidBool(2)));
    }

    #[test]
    fn test_nonzero_padding_rejected() {
        let err = from_bytes::<String>(&[0, 0, 0, 1, b'a', 0, 1, 0]).unwrap_err();
        assert!(matches!(err, Error::NonZeroPadding));
    }

    #[test]
    fn test_truncated_input_rejected() {
        let err = from_bytes::<i64>(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn test_length_beyond_input_rejected() {
        let err = from_bytes::<String>(&[0, 0, 1, 0, b'a']).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn test_trailing_data_rejected() {
        let err = from_bytes::<u32>(&[0, 0, 0, 1, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::TrailingData(4)));
    }

    #[test]
    fn test_base64_wrapping() {
        let text = to_base64(&Some(7u32)).unwrap();
        assert_eq!(text, "AAAAAQAAAAc=");
        assert_eq!(from_base64::<Option<u32>>(" AAAAAQAAAAc=\n").unwrap(), Some(7));
        assert!(matches!(from_base64::<u32>("not base64!"), Err(Error::Base64(_))));
    }
}
