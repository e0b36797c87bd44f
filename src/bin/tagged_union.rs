//! Discriminated unions: the tag decides which member is readable
//!
//! Run with: cargo run --bin tagged_union

use data_types_lesson::logging::init_logging;
use data_types_lesson::tagged::{print_s, TaggedScalar};

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut out = std::io::stdout().lock();
    let mut s = TaggedScalar::from_char(b'a');
    print_s(&mut out, &s)?;
    s.set_int(123);
    print_s(&mut out, &s)?;
    Ok(())
}
