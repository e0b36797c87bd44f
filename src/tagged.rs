//! Discriminated unions, twice.
//!
//! `TaggedScalar` spells out the C layout: a tag next to an untagged
//! `union`. Reading a union field is `unsafe`, so every read goes through a
//! method that checks the tag first. `Scalar` is the same idea as a native
//! enum, where the compiler keeps tag and payload together for us.

use std::fmt;
use std::io::{self, Write};

use crate::error::{LessonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Char,
    Int,
    Double,
}

#[derive(Clone, Copy)]
#[repr(C)]
union Payload {
    c: u8,
    i: i32,
    d: f64,
}

/// Tag plus one active payload member.
///
/// Invariant: `payload` was last written through the field `tag` names.
/// Only the constructors and `set_*` methods write, and they write both
/// halves together.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct TaggedScalar {
    tag: Tag,
    payload: Payload,
}

impl TaggedScalar {
    pub fn from_char(c: u8) -> Self {
        TaggedScalar {
            tag: Tag::Char,
            payload: Payload { c },
        }
    }

    pub fn from_int(i: i32) -> Self {
        TaggedScalar {
            tag: Tag::Int,
            payload: Payload { i },
        }
    }

    pub fn from_double(d: f64) -> Self {
        TaggedScalar {
            tag: Tag::Double,
            payload: Payload { d },
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn set_char(&mut self, c: u8) {
        *self = TaggedScalar::from_char(c);
    }

    pub fn set_int(&mut self, i: i32) {
        *self = TaggedScalar::from_int(i);
    }

    pub fn set_double(&mut self, d: f64) {
        *self = TaggedScalar::from_double(d);
    }

    fn expect_tag(&self, expected: Tag) -> Result<()> {
        if self.tag == expected {
            Ok(())
        } else {
            Err(LessonError::TagMismatch {
                expected,
                actual: self.tag,
            })
        }
    }

    pub fn as_char(&self) -> Result<u8> {
        self.expect_tag(Tag::Char)?;
        // SAFETY: tag is Char, so `c` is the member last written.
        Ok(unsafe { self.payload.c })
    }

    pub fn as_int(&self) -> Result<i32> {
        self.expect_tag(Tag::Int)?;
        // SAFETY: tag is Int, so `i` is the member last written.
        Ok(unsafe { self.payload.i })
    }

    pub fn as_double(&self) -> Result<f64> {
        self.expect_tag(Tag::Double)?;
        // SAFETY: tag is Double, so `d` is the member last written.
        Ok(unsafe { self.payload.d })
    }

    pub fn to_scalar(&self) -> Scalar {
        // SAFETY: each arm reads the member selected by the tag.
        unsafe {
            match self.tag {
                Tag::Char => Scalar::Char(char::from(self.payload.c)),
                Tag::Int => Scalar::Int(self.payload.i),
                Tag::Double => Scalar::Double(self.payload.d),
            }
        }
    }
}

impl TryFrom<Scalar> for TaggedScalar {
    type Error = LessonError;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Char(c) => u8::try_from(c)
                .map(TaggedScalar::from_char)
                .map_err(|_| LessonError::NotAByte(c)),
            Scalar::Int(i) => Ok(TaggedScalar::from_int(i)),
            Scalar::Double(d) => Ok(TaggedScalar::from_double(d)),
        }
    }
}

impl fmt::Debug for TaggedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedScalar")
            .field("tag", &self.tag)
            .field("value", &self.to_scalar())
            .finish()
    }
}

impl fmt::Display for TaggedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_scalar(), f)
    }
}

// ============================================================================
// The native version
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Char(char),
    Int(i32),
    Double(f64),
}

impl Scalar {
    pub fn tag(&self) -> Tag {
        match self {
            Scalar::Char(_) => Tag::Char,
            Scalar::Int(_) => Tag::Int,
            Scalar::Double(_) => Tag::Double,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Char(c) => write!(f, "{}", c),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Double(d) => write!(f, "{}", d),
        }
    }
}

/// Writes the active member and a newline. A char payload goes out as its
/// single raw byte, the way a C `char` reaches `std::cout`.
pub fn print_s<W: Write>(out: &mut W, s: &TaggedScalar) -> io::Result<()> {
    tracing::debug!(tag = ?s.tag(), "printing active member");
    match s.as_char() {
        Ok(c) => out.write_all(&[c, b'\n']),
        Err(_) => writeln!(out, "{}", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_char_then_int_golden_output() {
        let mut out = Vec::new();
        let mut s = TaggedScalar::from_char(b'a');
        print_s(&mut out, &s).unwrap();
        s.set_int(123);
        print_s(&mut out, &s).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n123\n");
    }

    #[test]
    fn test_read_checks_tag() {
        let s = TaggedScalar::from_int(123);
        assert_eq!(s.as_int(), Ok(123));
        assert_eq!(
            s.as_char(),
            Err(LessonError::TagMismatch {
                expected: Tag::Char,
                actual: Tag::Int
            })
        );
        assert!(s.as_double().is_err());
    }

    #[test]
    fn test_setter_moves_tag_with_payload() {
        let mut s = TaggedScalar::from_char(b'z');
        s.set_double(2.5);
        assert_eq!(s.tag(), Tag::Double);
        assert_eq!(s.as_double(), Ok(2.5));
        assert_eq!(s.to_string(), "2.5");
    }

    #[test]
    fn test_convert_from_native_enum() {
        let s = TaggedScalar::try_from(Scalar::Char('a')).unwrap();
        assert_eq!(s.to_scalar(), Scalar::Char('a'));
        assert_eq!(s.tag(), Scalar::Char('a').tag());

        assert_eq!(
            TaggedScalar::try_from(Scalar::Char('€')).unwrap_err(),
            LessonError::NotAByte('€')
        );
    }

    #[test]
    fn test_high_byte_prints_as_one_byte() {
        let s = TaggedScalar::from_char(0xE9);
        assert_eq!(s.to_scalar(), Scalar::Char('é'));

        let mut out = Vec::new();
        print_s(&mut out, &s).unwrap();
        assert_eq!(out, vec![0xE9, b'\n']);
    }

    proptest! {
        #[test]
        fn prop_every_byte_converts_back(b: u8) {
            let s = TaggedScalar::from_char(b);
            let back = TaggedScalar::try_from(s.to_scalar()).unwrap();
            prop_assert_eq!(back.as_char(), Ok(b));
        }
    }

    #[test]
    fn test_debug_shows_active_member_only() {
        let s = TaggedScalar::from_int(7);
        assert_eq!(
            format!("{:?}", s),
            "TaggedScalar { tag: Int, value: Int(7) }"
        );
    }
}
