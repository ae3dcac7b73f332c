//! XDR Serde Serializer implementation.

use serde::ser::{self, Serialize};

use super::pad_len;
use crate::xdr::{Error, Result};

/// Serializer for the XDR encoding.
///
/// Writes data in big-endian format directly to a byte buffer. Enum variants
/// are written as their 4-byte variant index, which is how ledger unions
/// carry their discriminant.
pub struct XdrSerializer<'w> {
    output: &'w mut Vec<u8>,
}

impl<'w> XdrSerializer<'w> {
    /// Creates a new serializer writing to the given buffer.
    pub fn new(output: &'w mut Vec<u8>) -> Self {
        Self { output }
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = u32::try_from(len).map_err(|_| Error::LengthOverflow(len))?;
        self.output.extend_from_slice(&len.to_be_bytes());
        Ok(())
    }

    /// Variable-length opaque: length + bytes + zero padding.
    fn write_opaque(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_len(bytes.len())?;
        let start = self.output.len();
        self.output.extend_from_slice(bytes);
        self.pad_from(start);
        Ok(())
    }

    fn pad_from(&mut self, start: usize) {
        let pad = pad_len(self.output.len() - start);
        self.output.resize(self.output.len() + pad, 0);
    }
}

impl<'a, 'w> ser::Serializer for &'a mut XdrSerializer<'w> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = XdrCompound<'a, 'w>;
    type SerializeTuple = XdrCompound<'a, 'w>;
    type SerializeTupleStruct = XdrCompound<'a, 'w>;
    type SerializeTupleVariant = XdrCompound<'a, 'w>;
    type SerializeMap = ser::Impossible<(), Error>;
    type SerializeStruct = XdrCompound<'a, 'w>;
    type SerializeStructVariant = XdrCompound<'a, 'w>;

    // === Primitive types ===

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.serialize_u32(u32::from(v))
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        Err(Error::UnsupportedType("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        Err(Error::UnsupportedType("i16"))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.output.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.output.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    /// A lone byte is only meaningful inside opaque data; the enclosing
    /// array or sequence pads it to a 4-byte boundary.
    fn serialize_u8(self, v: u8) -> Result<()> {
        self.output.push(v);
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        Err(Error::UnsupportedType("u16"))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.output.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.output.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(Error::UnsupportedType("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(Error::UnsupportedType("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(Error::UnsupportedType("char"))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.write_opaque(v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.write_opaque(v)
    }

    /// Optional data: bool flag followed by the value when present.
    fn serialize_none(self) -> Result<()> {
        self.serialize_u32(0)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<()> {
        self.serialize_u32(1)?;
        value.serialize(self)
    }

    /// XDR `void`.
    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        self.serialize_u32(variant_index)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.serialize_u32(variant_index)?;
        value.serialize(self)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        let len = len.ok_or(Error::UnsupportedType("sequence of unknown length"))?;
        self.write_len(len)?;
        Ok(XdrCompound::padded(self))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(XdrCompound::padded(self))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(XdrCompound::padded(self))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.serialize_u32(variant_index)?;
        Ok(XdrCompound::padded(self))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::UnsupportedType("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(XdrCompound::unpadded(self))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.serialize_u32(variant_index)?;
        Ok(XdrCompound::unpadded(self))
    }
}

/// Helper for serializing arrays, sequences, tuples and struct fields.
///
/// Arrays and sequences remember where their body started so that byte
/// elements (fixed and variable opaque) end on a 4-byte boundary.
pub struct XdrCompound<'a, 'w> {
    ser: &'a mut XdrSerializer<'w>,
    start: Option<usize>,
}

impl<'a, 'w> XdrCompound<'a, 'w> {
    fn padded(ser: &'a mut XdrSerializer<'w>) -> Self {
        let start = ser.output.len();
        Self { ser, start: Some(start) }
    }

    fn unpadded(ser: &'a mut XdrSerializer<'w>) -> Self {
        Self { ser, start: None }
    }

    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        if let Some(start) = self.start {
            self.ser.pad_from(start);
        }
        Ok(())
    }
}

impl ser::SerializeSeq for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTuple for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStruct for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        // Fields are serialized in declaration order (guaranteed by derive)
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for XdrCompound<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}
