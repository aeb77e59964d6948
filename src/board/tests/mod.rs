//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `queries.rs` - Occupancy, opponent, bounds and king queries
//! - `movegen.rs` - Per-piece destination rules
//! - `commit.rs` - Commit, capture and turn alternation
//! - `edge_cases.rs` - Board edges, stale handles, king captures
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Board, Square};

/// Parse a whitespace-separated list of algebraic squares.
fn squares(list: &str) -> Vec<Square> {
    let mut out: Vec<Square> = list
        .split_whitespace()
        .map(|s| s.parse().expect("valid square"))
        .collect();
    out.sort_unstable();
    out
}

fn board(placement: &str) -> Board {
    Board::from_placement(placement).expect("valid placement")
}
