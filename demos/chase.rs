//! Headless chase demo: a wandering player, a pursuing monster.
//!
//! Run: cargo run --bin chase -- [seed] [turns]
//! Set `RUST_LOG=debug` (or `trace`) to watch each search.

use gridpath_demos::{DemoConfig, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cfg = DemoConfig::from_args(std::env::args().skip(1))?;
    let summary = run(&cfg)?;
    print!("{}", summary.board);
    println!(
        "seed {}: {} turns, {} catches, {} layouts",
        cfg.seed, summary.turns, summary.catches, summary.layouts
    );
    Ok(())
}
