//! Decoder for PHP-serialized option values.
//!
//! WordPress stores array options such as `active_plugins` with PHP's
//! `serialize()`. Only the scalar and array forms are supported; objects and
//! references are rejected. String lengths are byte counts.

use crate::{DbError, DbResult};

/// Deepest array nesting accepted before decoding fails.
pub const MAX_DEPTH: usize = 64;

/// A decoded PHP value.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered key/value pairs.
    Array(Vec<(PhpValue, PhpValue)>),
}

impl PhpValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Values of an array, in stored order. Empty for non-arrays.
    pub fn array_values(&self) -> impl Iterator<Item = &PhpValue> {
        self.array_pairs().map(|(_, v)| v)
    }

    /// Keys of an array, in stored order. Empty for non-arrays.
    pub fn array_keys(&self) -> impl Iterator<Item = &PhpValue> {
        self.array_pairs().map(|(k, _)| k)
    }

    fn array_pairs(&self) -> std::slice::Iter<'_, (PhpValue, PhpValue)> {
        match self {
            Self::Array(pairs) => pairs.iter(),
            _ => (&[] as &[(PhpValue, PhpValue)]).iter(),
        }
    }
}

/// Decodes a complete serialized value; trailing bytes are an error.
pub fn unserialize(input: &str) -> DbResult<PhpValue> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = parser.value()?;
    if parser.pos != parser.bytes.len() {
        return Err(parser.error("trailing data after value"));
    }
    Ok(value)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn value(&mut self) -> DbResult<PhpValue> {
        let tag = self.next_byte()?;
        match tag {
            b'N' => {
                self.expect(b';')?;
                Ok(PhpValue::Null)
            }
            b'b' => {
                self.expect(b':')?;
                let raw = self.until(b';')?;
                match raw {
                    "0" => Ok(PhpValue::Bool(false)),
                    "1" => Ok(PhpValue::Bool(true)),
                    other => Err(self.error(&format!("invalid boolean {other:?}"))),
                }
            }
            b'i' => {
                self.expect(b':')?;
                let raw = self.until(b';')?;
                raw.parse()
                    .map(PhpValue::Int)
                    .map_err(|_| self.error(&format!("invalid integer {raw:?}")))
            }
            b'd' => {
                self.expect(b':')?;
                let raw = self.until(b';')?;
                raw.parse()
                    .map(PhpValue::Float)
                    .map_err(|_| self.error(&format!("invalid float {raw:?}")))
            }
            b's' => {
                self.expect(b':')?;
                let len = self.length(b':')?;
                self.expect(b'"')?;
                let end = self
                    .pos
                    .checked_add(len)
                    .filter(|end| *end <= self.bytes.len())
                    .ok_or_else(|| self.error("string length exceeds input"))?;
                let text = std::str::from_utf8(&self.bytes[self.pos..end])
                    .map_err(|_| self.error("string is not valid UTF-8"))?
                    .to_string();
                self.pos = end;
                self.expect(b'"')?;
                self.expect(b';')?;
                Ok(PhpValue::Str(text))
            }
            b'a' => {
                self.expect(b':')?;
                let len = self.length(b':')?;
                self.expect(b'{')?;
                if self.depth >= MAX_DEPTH {
                    return Err(self.error(&format!("arrays nested deeper than {MAX_DEPTH}")));
                }
                self.depth += 1;
                let pairs = self.pairs(len)?;
                self.depth -= 1;
                self.expect(b'}')?;
                Ok(PhpValue::Array(pairs))
            }
            other => {
                self.pos -= 1;
                Err(self.error(&format!("unsupported type tag {:?}", other as char)))
            }
        }
    }

    fn pairs(&mut self, len: usize) -> DbResult<Vec<(PhpValue, PhpValue)>> {
        let mut pairs = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            let key = self.value()?;
            if !matches!(key, PhpValue::Int(_) | PhpValue::Str(_)) {
                return Err(self.error("array key must be an integer or string"));
            }
            let value = self.value()?;
            pairs.push((key, value));
        }
        Ok(pairs)
    }

    fn next_byte(&mut self) -> DbResult<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn expect(&mut self, wanted: u8) -> DbResult<()> {
        let got = self.next_byte()?;
        if got == wanted {
            Ok(())
        } else {
            self.pos -= 1;
            Err(self.error(&format!("expected {:?}, found {:?}", wanted as char, got as char)))
        }
    }

    /// Reads ASCII up to (and consuming) `terminator`.
    fn until(&mut self, terminator: u8) -> DbResult<&'a str> {
        let bytes = self.bytes;
        let start = self.pos;
        let offset = bytes[start..]
            .iter()
            .position(|b| *b == terminator)
            .ok_or_else(|| self.error(&format!("missing {:?}", terminator as char)))?;
        self.pos = start + offset + 1;
        std::str::from_utf8(&bytes[start..start + offset])
            .map_err(|_| self.error("non-ASCII length or scalar"))
    }

    fn length(&mut self, terminator: u8) -> DbResult<usize> {
        let raw = self.until(terminator)?;
        raw.parse()
            .map_err(|_| self.error(&format!("invalid length {raw:?}")))
    }

    fn error(&self, message: &str) -> DbError {
        DbError::Decode {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}
