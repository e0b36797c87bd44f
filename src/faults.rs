//! Classroom faults: things that go wrong in C++ and what Rust does instead.
//!
//! The snippets are text only. Most of them do not compile, and the ones
//! that do would panic; neither is something to run from a lesson binary.

use std::fmt;
use std::io::{self, Write};

use colored::Colorize;

use crate::error::{LessonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    CompileTime,
    Runtime,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::CompileTime => f.write_str("rejected at compile time"),
            Detection::Runtime => f.write_str("panics at runtime"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    SyntaxError,
    StaticOutOfBounds,
    DynamicOutOfBounds,
    FormatStringMisuse,
    DivisionByZeroLiteral,
    DivisionByZeroVariable,
    DivisionByZeroBranch,
}

impl Fault {
    pub const ALL: [Fault; 7] = [
        Fault::SyntaxError,
        Fault::StaticOutOfBounds,
        Fault::DynamicOutOfBounds,
        Fault::FormatStringMisuse,
        Fault::DivisionByZeroLiteral,
        Fault::DivisionByZeroVariable,
        Fault::DivisionByZeroBranch,
    ];

    pub fn summary(self) -> &'static str {
        match self {
            Fault::SyntaxError => "Syntax error",
            Fault::StaticOutOfBounds => "Array out-of-bounds with a statically known index",
            Fault::DynamicOutOfBounds => "Array out-of-bounds with a dynamically computed index",
            Fault::FormatStringMisuse => "Format string that is not a literal",
            Fault::DivisionByZeroLiteral => "Division by a literal zero",
            Fault::DivisionByZeroVariable => "Division by a zero variable",
            Fault::DivisionByZeroBranch => "Division by a zero picked by a branch",
        }
    }

    pub fn snippet(self) -> &'static str {
        match self {
            Fault::SyntaxError => r#"println("hello world");"#,
            Fault::StaticOutOfBounds => r#"println!("{}", array[3]);"#,
            Fault::DynamicOutOfBounds => {
                r#"for i in 0..=array.len() { println!("{}", array[i]); }"#
            }
            Fault::FormatStringMisuse => {
                r#"let format = "a very innocent hello {}"; println!(format);"#
            }
            Fault::DivisionByZeroLiteral => "let joy_division = 0 / 0;",
            Fault::DivisionByZeroVariable => "let joy = 0; let joy_division = 0 / joy;",
            Fault::DivisionByZeroBranch => {
                "let joy = if false { 1 } else { 0 }; let joy_division = 0 / joy;"
            }
        }
    }

    /// When rustc (or the running program) stops us. Constant propagation
    /// turns the zero variable into a deny-by-default lint. We count the
    /// branch version as hidden from it and left to the runtime check.
    pub fn detection(self) -> Detection {
        match self {
            Fault::SyntaxError
            | Fault::StaticOutOfBounds
            | Fault::FormatStringMisuse
            | Fault::DivisionByZeroLiteral
            | Fault::DivisionByZeroVariable => Detection::CompileTime,
            Fault::DynamicOutOfBounds | Fault::DivisionByZeroBranch => Detection::Runtime,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary(), self.detection())
    }
}

pub fn print_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    for fault in Fault::ALL {
        let detection = match fault.detection() {
            Detection::CompileTime => fault.detection().to_string().green(),
            Detection::Runtime => fault.detection().to_string().yellow(),
        };
        writeln!(out, "{}: {}", fault.summary(), detection)?;
        writeln!(out, "    {}", fault.snippet().dimmed())?;
    }
    Ok(())
}

// ============================================================================
// Safe counterparts
// ============================================================================

pub fn checked_get<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(LessonError::OutOfBounds {
        index,
        len: items.len(),
    })
}

pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(LessonError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(LessonError::Overflow)
}
