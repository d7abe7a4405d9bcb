//! Sort an alternating row with both algorithms and compare the outcomes.
//!
//! Run with: `cargo run --example alternating_sort`

use disksort::prelude::*;

fn main() -> Result<(), DiskSortError> {
    let row = DiskRow::new(6)?;

    println!("Input row ({} disks):", row.total_count());
    println!("  {row}");
    println!();

    let bubble = sort_left_to_right(&row)?;
    println!("Left-to-right:");
    println!("{bubble}");
    println!();

    let lawnmower = sort_lawnmower(&row)?;
    println!("Lawnmower:");
    println!("{lawnmower}");
    println!();

    // Both algorithms resolve the same set of inversions.
    assert_eq!(bubble.swap_count(), lawnmower.swap_count());
    assert_eq!(bubble.after(), lawnmower.after());

    // A configured sorter can be reused across rows.
    let sorter = DiskSort::new().strategy(Lawnmower).build()?;
    for light_count in [1, 2, 4, 8] {
        let input = DiskRow::new(light_count)?;
        let sorted = sorter.sort(&input)?;
        println!(
            "{:2} light disks -> {:3} swaps ({})",
            light_count,
            sorted.swap_count(),
            sorted.after()
        );
    }

    Ok(())
}
