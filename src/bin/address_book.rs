//! Associative containers: a composite (name, age) key
//!
//! Run with: cargo run --bin address_book

use data_types_lesson::address_book::{print_address_book, AddressBook};
use data_types_lesson::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let people = AddressBook::sample();
    tracing::debug!(entries = people.len(), "address book filled");
    print_address_book(&mut std::io::stdout().lock(), &people)?;
    Ok(())
}
