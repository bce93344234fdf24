// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular arithmetic over Z/mZ.
//!
//! All residues are held as `u64` in `[0, m-1]`. Intermediate products are
//! widened to `i128`; a modulus is at most `i64::MAX`, so `a * b - c * d`
//! never overflows.
//!
//! # Examples
//!
//! ```
//! use number_wall::arith::Modulus;
//!
//! let m = Modulus::new(7).unwrap();
//! assert_eq!(m.reduce(-1), 6);
//! assert_eq!(m.inverse(3).unwrap(), 5);
//! assert_eq!(m.inverse(0).unwrap(), 0);
//! ```

use crate::error::{Result, WallError};
use serde::Serialize;

/// A residue in `[0, m-1]`.
pub type Residue = u64;

/// Reduce `n` modulo `m`, giving a value in `[0, m-1]` for negative `n` too.
///
/// # Panics
///
/// Panics if `m == 0`.
pub fn reduce(n: i128, m: u64) -> Residue {
    n.rem_euclid(m as i128) as Residue
}

/// Multiplicative inverse of `n` modulo `m`.
///
/// Returns `Ok(0)` when `n ≡ 0`. This is a guard value, not an inverse; the
/// wall builder branches on zero divisors before ever relying on it.
///
/// Uses the extended Euclidean algorithm. Where an inverse exists it is
/// unique in `[0, m-1]`, so this agrees with an exhaustive search over residues.
pub fn inverse(n: i128, m: u64) -> Result<Residue> {
    let n = reduce(n, m);
    if n == 0 {
        return Ok(0);
    }
    let (mut old_r, mut r) = (n as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return Err(WallError::DivisionUndefined {
            value: n,
            modulus: m,
        });
    }
    Ok(reduce(old_s, m))
}

/// A validated modulus (`2 <= m <= i64::MAX`).
///
/// This is a newtype wrapper so the builder can never be handed a modulus
/// for which reduction is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Modulus(u64);

impl Modulus {
    /// Create a new modulus, failing outside `2..=i64::MAX`.
    pub fn new(m: u64) -> Result<Self> {
        if !(2..=i64::MAX as u64).contains(&m) {
            return Err(WallError::InvalidModulus { modulus: m });
        }
        Ok(Self(m))
    }

    /// Get the underlying value.
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn reduce(self, n: i128) -> Residue {
        reduce(n, self.0)
    }

    pub fn inverse(self, n: i128) -> Result<Residue> {
        inverse(n, self.0)
    }

    /// `a * b * c` reduced, for residues (or small signed factors).
    pub fn product(self, factors: &[i128]) -> Residue {
        factors
            .iter()
            .fold(1i128, |acc, &f| self.reduce(acc * self.reduce(f) as i128) as i128)
            as Residue
    }

    /// Check whether every nonzero residue is invertible (i.e. `m` is prime).
    ///
    /// Trial division; moduli used for walls are small.
    pub fn is_prime(self) -> bool {
        let m = self.0;
        if m < 4 {
            return true;
        }
        if m % 2 == 0 {
            return false;
        }
        let mut d = 3u64;
        while d.saturating_mul(d) <= m {
            if m % d == 0 {
                return false;
            }
            d += 2;
        }
        true
    }
}

/// `(-1)^e` as a signed factor, for any (possibly negative) exponent.
pub fn sign(e: i64) -> i128 {
    if e.rem_euclid(2) == 0 {
        1
    } else {
        -1
    }
}
