//! bubblesort Usage Examples
//!
//! This example demonstrates:
//! - One-call sorting with the default configuration
//! - A configured sorter with fixed passes and verification
//! - Handling an absent sequence

use bubblesort::prelude::*;

fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(60));
    println!("bubblesort Usage Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_default_sort();
    example_2_configured_sorter()?;
    example_3_absent_sequence();

    Ok(())
}

/// Example 1: Default Sort
/// Sorts in place and stops as soon as a pass makes no exchange
fn example_1_default_sort() {
    println!("Example 1: Default Sort");
    println!("{}", "-".repeat(60));

    let mut values = [5, 3, 8, 4, 2];
    let report = bubblesort::sort(&mut values);

    println!("Sorted: {:?}", values);
    println!("{}", report);
}

/// Example 2: Configured Sorter
/// Runs n full passes and re-checks the result
fn example_2_configured_sorter() -> Result<(), SortError> {
    println!("Example 2: Configured Sorter");
    println!("{}", "-".repeat(60));

    let sorter = BubbleSort::new()
        .termination(FixedPasses)
        .verify(true)
        .build()?;

    let mut values = vec![-3, 0, -3, 2];
    let report = sorter.sort(&mut values);

    println!("Sorted: {:?}", values);
    println!("{}", report);
    Ok(())
}

/// Example 3: Absent Sequence
/// The checked entry point reports the missing argument instead of panicking
fn example_3_absent_sequence() {
    println!("Example 3: Absent Sequence");
    println!("{}", "-".repeat(60));

    let missing: Option<&mut [i32]> = None;
    match bubblesort::try_sort(missing) {
        Ok(report) => println!("{}", report),
        Err(e) => println!("Sorting failed: {}", e),
    }
    println!();
}
