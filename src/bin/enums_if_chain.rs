//! Enumerations: label via a sequential comparison chain
//!
//! Run with: cargo run --bin enums_if_chain

use data_types_lesson::logging::init_logging;
use data_types_lesson::shirt::{print_size, BranchStyle, ShirtSize};

fn main() -> anyhow::Result<()> {
    init_logging();

    let my_size = ShirtSize::Medium;
    print_size(&mut std::io::stdout().lock(), my_size.discriminant(), BranchStyle::IfChain)?;
    Ok(())
}
