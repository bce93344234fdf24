// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for number wall construction.
//!
//! Besides the structural properties of a wall (seed rows, trapezoid shape,
//! residue range), every computed cell is checked against its definition as
//! a Toeplitz determinant, which exercises the window code whenever the
//! sequence produces zeros.

mod common;

use common::{assert_matches_determinants, modulus};
use number_wall::sequence::thue_morse;
use number_wall::{Cell, NumberWall, Rule, WallError};
use proptest::prelude::*;

#[test]
fn test_seed_rows() {
    let wall = NumberWall::build(&[4, -1, 7, 0, 2, 9], modulus(5)).unwrap();
    assert_eq!(wall.entries(-1), vec![0; 6]);
    assert_eq!(wall.entries(0), vec![1; 6]);
    assert_eq!(wall.entries(1), vec![4, 4, 2, 0, 2, 4]);
    for r in -1..=wall.last_row() {
        let row = wall.row(r).unwrap();
        assert_eq!(row[0], Cell::Blank, "label column of row {}", r);
        assert_eq!(row[row.len() - 1], Cell::Blank, "trailing column of row {}", r);
    }
}

#[test]
fn test_small_sequence_mod_two() {
    let sequence = [1, 2, 3, 4, 5];
    let first = NumberWall::build(&sequence, modulus(2)).unwrap();
    assert_eq!(first.entries(1), vec![1, 0, 1, 0, 1]);
    // Row 2: 0² - 1·1, 1² - 0·0, 0² - 1·1 (mod 2).
    assert_eq!(first.entries(2), vec![1, 1, 1]);

    let second = NumberWall::build(&sequence, modulus(2)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_thue_morse_shape() {
    let sequence = thue_morse(300);
    let wall = NumberWall::build(&sequence, modulus(2)).unwrap();
    let length = sequence.len() as isize;

    assert_eq!(wall.last_row(), 150);
    assert!(wall.entries(2).iter().all(|&v| v <= 1));
    for r in 1..=wall.last_row() {
        let row = wall.row(r).unwrap();
        let valid = wall.valid_columns(r);
        assert_eq!(wall.entries(r).len() as isize, length - 2 * (r - 1), "row {}", r);
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Value(v) => {
                    assert!(valid.contains(&c), "row {} column {}", r, c);
                    assert!(*v <= 1);
                }
                Cell::Blank => assert!(!valid.contains(&c), "row {} column {}", r, c),
                Cell::Pending => panic!("pending cell at row {} column {}", r, c),
            }
        }
    }
}

#[test]
fn test_thue_morse_matches_determinants() {
    let sequence = thue_morse(64);
    let wall = NumberWall::build(&sequence, modulus(2)).unwrap();
    assert_matches_determinants(&sequence, 2, &wall);
    assert!(wall.statistics().get(Rule::InnerFrame) > 0);
}

#[test]
fn test_zero_run_window() {
    // Three zeros in the input make a 3x3 window on rows 1..=3.
    let sequence = [1, 1, 2, 0, 0, 0, 1, 2, 1, 1, 3];
    let wall = NumberWall::build(&sequence, modulus(5)).unwrap();
    assert_eq!(wall.entries(2), vec![4, 4, 0, 0, 0, 1, 3, 4, 3]);
    assert_eq!(wall.entries(3), vec![3, 0, 0, 0, 1, 0, 2]);
    assert_eq!(wall.entries(4), vec![2, 4, 3, 1, 1]);
    assert_eq!(wall.entries(5), vec![3, 1, 3]);
    assert_eq!(wall.entries(6), vec![4]);
    assert_matches_determinants(&sequence, 5, &wall);
}

#[test]
fn test_single_term() {
    let wall = NumberWall::build(&[7], modulus(3)).unwrap();
    assert_eq!(wall.last_row(), 1);
    assert_eq!(wall.entries(1), vec![1]);
}

#[test]
fn test_errors() {
    assert!(matches!(
        NumberWall::build(&[], modulus(3)),
        Err(WallError::InvalidInput { .. })
    ));
    assert!(matches!(
        NumberWall::build(&[1, 1, 2, 1, 1], modulus(4)),
        Err(WallError::DivisionUndefined { value: 2, modulus: 4 })
    ));
}

fn prime() -> impl Strategy<Value = u64> {
    prop::sample::select(vec![2u64, 3, 5, 7, 11])
}

fn zero_heavy_sequence() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(prop_oneof![3 => Just(0i64), 2 => -30i64..30], 1..28)
}

proptest! {
    /// Every computed cell is a residue; everything else is blank.
    #[test]
    fn entries_are_residues(p in prime(), sequence in zero_heavy_sequence()) {
        let wall = NumberWall::build(&sequence, modulus(p)).unwrap();
        for (r, row) in wall.rows() {
            let valid = wall.valid_columns(r);
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Value(v) => {
                        prop_assert!(*v < p);
                        prop_assert!(valid.contains(&c));
                    }
                    Cell::Blank => prop_assert!(!valid.contains(&c)),
                    Cell::Pending => prop_assert!(false, "pending cell left behind"),
                }
            }
        }
    }

    /// Row 1 is the input reduced mod p.
    #[test]
    fn first_row_is_reduced_input(p in prime(), sequence in zero_heavy_sequence()) {
        let wall = NumberWall::build(&sequence, modulus(p)).unwrap();
        let reduced: Vec<u64> = sequence.iter().map(|&x| x.rem_euclid(p as i64) as u64).collect();
        prop_assert_eq!(wall.entries(1), reduced);
    }

    /// Over a prime field the wall agrees with the Toeplitz determinants.
    #[test]
    fn matches_determinants(p in prime(), sequence in zero_heavy_sequence()) {
        let wall = NumberWall::build(&sequence, modulus(p)).unwrap();
        assert_matches_determinants(&sequence, p, &wall);
    }
}
