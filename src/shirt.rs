//! Enumerations: one closed set of sizes, two ways to branch on it.
//!
//! A C `enum shirt_size` is just an integer, so the printing function has to
//! cope with values outside the declared set. A Rust `ShirtSize` can never
//! hold such a value; the "unknown" path only exists while we are still
//! looking at the raw integer.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{LessonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ShirtSize {
    Small = 0,
    Medium = 1,
    Large = 2,
    XLarge = 3,
}

impl ShirtSize {
    pub const ALL: [ShirtSize; 4] = [
        ShirtSize::Small,
        ShirtSize::Medium,
        ShirtSize::Large,
        ShirtSize::XLarge,
    ];

    /// No wildcard arm: adding a variant is a compile error here until it
    /// gets a label.
    pub fn label(self) -> &'static str {
        match self {
            ShirtSize::Small => "small",
            ShirtSize::Medium => "medium",
            ShirtSize::Large => "large",
            ShirtSize::XLarge => "xlarge",
        }
    }

    pub fn discriminant(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ShirtSize {
    type Error = LessonError;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(ShirtSize::Small),
            1 => Ok(ShirtSize::Medium),
            2 => Ok(ShirtSize::Large),
            3 => Ok(ShirtSize::XLarge),
            other => Err(LessonError::UnknownSize(other)),
        }
    }
}

impl FromStr for ShirtSize {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        ShirtSize::ALL
            .into_iter()
            .find(|size| size.label() == s)
            .ok_or_else(|| LessonError::UnparsedSize(s.to_string()))
    }
}

impl fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Printable label for a raw size value, `unknown` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLabel(pub &'static str);

impl SizeLabel {
    pub const UNKNOWN: SizeLabel = SizeLabel("unknown");
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchStyle {
    Match,
    IfChain,
}

// ============================================================================
// Multi-way branch
// ============================================================================

pub fn label_by_match(raw: i32) -> SizeLabel {
    match ShirtSize::try_from(raw) {
        Ok(size) => SizeLabel(size.label()),
        Err(_) => SizeLabel::UNKNOWN,
    }
}

// ============================================================================
// Sequential comparison chain
// ============================================================================

pub fn label_by_if_chain(raw: i32) -> SizeLabel {
    if raw == ShirtSize::Small.discriminant() {
        SizeLabel("small")
    } else if raw == ShirtSize::Medium.discriminant() {
        SizeLabel("medium")
    } else if raw == ShirtSize::Large.discriminant() {
        SizeLabel("large")
    } else if raw == ShirtSize::XLarge.discriminant() {
        SizeLabel("xlarge")
    } else {
        SizeLabel::UNKNOWN
    }
}

pub fn print_size<W: Write>(out: &mut W, raw: i32, style: BranchStyle) -> io::Result<()> {
    let label = match style {
        BranchStyle::Match => label_by_match(raw),
        BranchStyle::IfChain => label_by_if_chain(raw),
    };
    if label == SizeLabel::UNKNOWN {
        tracing::warn!(raw, "value outside the shirt size set");
    }
    writeln!(out, "my size is {}", label)
}

// ============================================================================
// Variants with data
// ============================================================================

/// Some clothes are sized with adjectives, some with numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Named(ShirtSize),
    Numeric(u32),
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fit::Named(size) => write!(f, "{}", size),
            Fit::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// Prints both kinds of size with their `Debug` form, variant names included.
pub fn print_fits<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Isn't it strange that some clothes' sizes are adjectives like {:?},",
        Fit::Named(ShirtSize::Small)
    )?;
    writeln!(out, "but sometimes they are numbers like {:?}?", Fit::Numeric(42))
}
