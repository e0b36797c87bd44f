//! Enumerations: variants that carry data
//!
//! Run with: cargo run --bin shirt_sizes

use data_types_lesson::logging::init_logging;
use data_types_lesson::shirt::print_fits;

fn main() -> anyhow::Result<()> {
    init_logging();

    print_fits(&mut std::io::stdout().lock())?;
    Ok(())
}
