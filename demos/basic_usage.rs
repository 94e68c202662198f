//! Basic usage example for the diffset library.
//!
//! This example demonstrates how to construct and verify difference
//! families, and how to query existence for parameters the library cannot
//! settle.

use diffset::verify::verify_family;
use diffset::{difference_family, difference_family_existence};

fn main() {
    println!("Diffset Library - Basic Usage Example\n");

    // Construct a (73,4,1)-difference family: 6 blocks of size 4 over GF(73)
    println!("Constructing a (73,4,1)-difference family...");
    let (group, blocks) = difference_family(73, 4, 1, true).expect("construction failed");

    println!("Group: {group}");
    println!("Blocks:");
    for block in &blocks {
        println!("  {block:?}");
    }
    println!();

    // Verify the family explicitly
    println!("Verifying the difference family property...");
    let check = verify_family(&group, &blocks, Some(73), Some(4), Some(1))
        .expect("group classification failed");
    if check.is_valid {
        println!(
            "✓ Family is a valid ({},{},{})-difference family",
            check.v, check.k, check.lambda
        );
    } else {
        println!("✗ Family failed verification: {:?}", check.issue);
    }
    println!();

    // A single-block family (a difference set) from quadratic residues
    println!("Constructing the quadratic residue difference set for v = 23...");
    let (group, blocks) = difference_family(23, 11, 5, true).expect("construction failed");
    println!("Group: {group}, block: {:?}", blocks[0]);
    println!();

    // Existence queries keep three answers apart
    println!("Existence queries:");
    for (v, k) in [(31u32, 6usize), (8, 3), (61, 6)] {
        println!("  ({v},{k},1): {}", difference_family_existence(v, k, 1));
    }
}
