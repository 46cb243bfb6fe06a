//! Min-Max Heap walkthrough
//!
//! Pushes a fixed set of values, then reads and removes both extremes.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example minmax_demo
//!
//! # Show the repair passes as they run
//! RUST_LOG=trace cargo run --example minmax_demo
//! ```

use anyhow::Result;
use log::{info, LevelFilter};
use rust_minmax_heap::minmax::MinMaxHeap;
use rust_minmax_heap::DoubleEndedHeap;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;

    let mut heap = MinMaxHeap::new();
    for value in [10, 5, 30, 3, 17, 22] {
        heap.push(value);
    }
    info!("storage order after pushes: {:?}", heap.iter().collect::<Vec<_>>());

    println!("Min: {}", heap.peek_min()?);
    println!("Max: {}", heap.peek_max()?);

    println!("Extracted Min: {}", heap.pop_min()?);
    println!("Extracted Max: {}", heap.pop_max()?);

    println!("Min after extractions: {}", heap.peek_min()?);
    println!("Max after extractions: {}", heap.peek_max()?);

    // Emptying the heap and asking again surfaces the error to the caller
    while heap.pop_min().is_ok() {}
    if let Err(err) = heap.peek_max() {
        info!("peek on drained heap: {}", err);
    }

    Ok(())
}
