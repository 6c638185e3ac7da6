use std::io::Read;
use std::marker::PhantomData;

use byteorder::ByteOrder;
use byteorder::ReadBytesExt;

use crate::de::lex;
use crate::schema::{LexClass, NumericKind};
use crate::PlyError;

/// Source of scalar property values, one per call, in schema order.
pub trait ScalarReader {
    /// Read the next value declared as `kind`, widened or narrowed to `f32`.
    fn read_scalar(&mut self, kind: NumericKind) -> Result<f32, PlyError>;

    /// Read the next value declared as `kind` and drop it.
    fn skip_scalar(&mut self, kind: NumericKind) -> Result<(), PlyError> {
        self.read_scalar(kind).map(|_| ())
    }
}

pub struct BinValReader<R: Read, E: ByteOrder> {
    reader: R,
    _endian: PhantomData<E>,
}

impl<R: Read, E: ByteOrder> BinValReader<R, E> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            _endian: PhantomData,
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, PlyError> {
        Ok(self.reader.read_u8()?)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, PlyError> {
        Ok(self.reader.read_u32::<E>()?)
    }
}

impl<R: Read, E: ByteOrder> ScalarReader for BinValReader<R, E> {
    fn read_scalar(&mut self, kind: NumericKind) -> Result<f32, PlyError> {
        let reader = &mut self.reader;
        let value = match kind {
            NumericKind::I8 => reader.read_i8()? as f32,
            NumericKind::U8 => reader.read_u8()? as f32,
            NumericKind::I16 => reader.read_i16::<E>()? as f32,
            NumericKind::U16 => reader.read_u16::<E>()? as f32,
            NumericKind::I32 => reader.read_i32::<E>()? as f32,
            NumericKind::U32 => reader.read_u32::<E>()? as f32,
            NumericKind::F32 => reader.read_f32::<E>()?,
            NumericKind::F64 => reader.read_f64::<E>()? as f32,
        };
        Ok(value)
    }

    fn skip_scalar(&mut self, kind: NumericKind) -> Result<(), PlyError> {
        let mut buf = [0u8; 8];
        self.reader.read_exact(&mut buf[..kind.size_bytes()])?;
        Ok(())
    }
}

/// Reads tokens off a single ASCII record line.
pub struct AsciiValReader<'a> {
    line: &'a str,
    pos: usize,
    record: usize,
}

impl<'a> AsciiValReader<'a> {
    pub(crate) fn new(line: &'a str, record: usize) -> Self {
        let pos = lex::whitespace(line.as_bytes());
        Self {
            line,
            pos,
            record,
        }
    }

    fn next_token(&mut self, kind: NumericKind) -> Result<&'a str, PlyError> {
        let rest = &self.line.as_bytes()[self.pos..];
        let len = lex::token(kind.lex_class(), rest).ok_or(PlyError::InvalidAsciiToken {
            record: self.record,
            kind,
        })?;

        let token = &self.line[self.pos..self.pos + len];
        self.pos += len;
        self.pos += lex::whitespace(&self.line.as_bytes()[self.pos..]);
        Ok(token)
    }
}

impl ScalarReader for AsciiValReader<'_> {
    fn read_scalar(&mut self, kind: NumericKind) -> Result<f32, PlyError> {
        let token = self.next_token(kind)?;
        let invalid = || PlyError::InvalidAsciiToken {
            record: self.record,
            kind,
        };

        let value = match kind.lex_class() {
            LexClass::Signed => token.parse::<i64>().map_err(|_| invalid())? as f32,
            LexClass::Unsigned => token.parse::<u64>().map_err(|_| invalid())? as f32,
            LexClass::Decimal => token.parse::<f64>().map_err(|_| invalid())? as f32,
        };
        Ok(value)
    }
}
