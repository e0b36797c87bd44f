//! Classroom faults. Uncomment one snippet at a time and see what happens.
//! Leave them broken: the point is the compiler's (or the runtime's) reaction.
//!
//! Run with: cargo run --bin errors_demo

use data_types_lesson::faults::print_catalog;
use data_types_lesson::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    //# Syntax error
    // println("hello world");

    // let array = ["hello", "new", "world!"];

    //# Array out-of-bounds with a statically known index
    // println!("{}", array[3]);

    //# Array out-of-bounds with a dynamically computed index
    // for i in 0..=array.len() {
    //     println!("{}", array[i]);
    // }

    //# Trying to pass a runtime string where a format literal is required
    // let format = "a very innocent hello {}";
    // println!(format);

    //# Division by zero
    // let joy_division = 0/0;

    // let joy = 0;
    // let joy_division = 0/joy;

    // let joy = if false {1} else {0};
    // let joy_division = 0/joy;

    // println!("{}", joy_division);

    print_catalog(&mut std::io::stdout().lock())?;
    Ok(())
}
