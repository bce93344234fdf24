// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use number_wall::{Cell, Modulus, NumberWall};

pub fn modulus(m: u64) -> Modulus {
    Modulus::new(m).unwrap()
}

/// Determinant of a square matrix modulo a prime `p`, by Gaussian elimination.
pub fn det_mod(mut a: Vec<Vec<i64>>, p: i64) -> u64 {
    let n = a.len();
    let mut det = 1i64;
    for col in 0..n {
        let Some(pivot) = (col..n).find(|&r| a[r][col].rem_euclid(p) != 0) else {
            return 0;
        };
        if pivot != col {
            a.swap(pivot, col);
            det = -det;
        }
        let lead = a[col][col].rem_euclid(p);
        det = (det * lead).rem_euclid(p);
        let inv = pow_mod(lead, p - 2, p);
        for r in col + 1..n {
            let factor = (a[r][col].rem_euclid(p) * inv) % p;
            for c in col..n {
                a[r][c] = (a[r][c] - factor * a[col][c]).rem_euclid(p);
            }
        }
    }
    det.rem_euclid(p) as u64
}

fn pow_mod(mut base: i64, mut exp: i64, p: i64) -> i64 {
    let mut result = 1;
    base = base.rem_euclid(p);
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % p;
        }
        base = base * base % p;
        exp >>= 1;
    }
    result
}

/// Wall entry (row `r`, column `n`) straight from its definition as the
/// Toeplitz determinant `det(s[n + i - j])`, `0 <= i, j < r`, 1-based `n`.
pub fn toeplitz_entry(sequence: &[i64], p: u64, r: usize, n: usize) -> u64 {
    let matrix = (0..r)
        .map(|i| {
            (0..r)
                .map(|j| sequence[n + i - j - 1].rem_euclid(p as i64))
                .collect()
        })
        .collect();
    det_mod(matrix, p as i64)
}

/// Check every computed cell of `wall` against [`toeplitz_entry`].
pub fn assert_matches_determinants(sequence: &[i64], p: u64, wall: &NumberWall) {
    for r in 1..=wall.last_row() {
        for n in wall.valid_columns(r) {
            let expected = toeplitz_entry(sequence, p, r as usize, n);
            assert_eq!(
                wall.cell(r, n as isize),
                Cell::Value(expected),
                "row {} column {} of {:?} mod {}",
                r,
                n,
                sequence,
                p
            );
        }
    }
}

/// Pad explicit rows (from row -1) with blank sentinel columns.
pub fn table(m: u64, rows: &[Vec<u64>]) -> NumberWall {
    let rows = rows
        .iter()
        .map(|row| {
            std::iter::once(Cell::Blank)
                .chain(row.iter().map(|&v| Cell::Value(v)))
                .chain(std::iter::once(Cell::Blank))
                .collect()
        })
        .collect();
    NumberWall::from_rows(modulus(m), rows).unwrap()
}
