//! # Data Types
//!
//! This crate contains the examples for the data types lesson.
//!
//! ## Samples Covered
//!
//! 1. **Enumerations** - the same label mapping written as a `match` and as
//!    an `if`/`else` chain, plus enums whose variants carry data
//! 2. **Discriminated Unions** - a C-layout tag + `union` record next to
//!    the native Rust enum that replaces it
//! 3. **Classroom Faults** - snippets that fail to compile or panic, kept
//!    commented out, with their safe counterparts
//! 4. **Associative Containers** - an address book keyed by `(name, age)`
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin enums_match
//! cargo run --bin enums_if_chain
//! cargo run --bin shirt_sizes
//! cargo run --bin tagged_union
//! cargo run --bin errors_demo
//! cargo run --bin address_book
//!
//! # Diagnostics go to stderr
//! DATA_TYPES_LOG=debug cargo run --bin tagged_union
//! ```

pub mod address_book;
pub mod error;
pub mod faults;
pub mod logging;
pub mod shirt;
pub mod tagged;

pub use error::LessonError;
