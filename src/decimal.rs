//! Fixed-point decimal arithmetic over [`BigInt`].
//!
//! A [`Fixed`] value is an integer scaled by `10^digits`, where `digits` comes
//! from the [`Precision`] of the [`DecimalContext`] that produced it. Every
//! intermediate operation truncates toward negative infinity; only
//! [`DecimalContext::round`] rounds, using round-half-to-even.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use serde::Deserialize;

use crate::error::{FibonacciError, Result};

/// Number of fractional decimal digits carried by a [`DecimalContext`].
///
/// Deserializes from a plain integer so it can sit inside a host
/// application's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u32")]
pub struct Precision(u32);

impl Precision {
    /// Enough to keep Binet's formula exact through F(500) with a wide margin.
    pub const DEFAULT: Precision = Precision(300);

    pub fn new(digits: u32) -> Result<Self> {
        if digits == 0 {
            return Err(FibonacciError::InvalidPrecision(digits));
        }
        Ok(Precision(digits))
    }

    pub fn digits(self) -> u32 {
        self.0
    }

    pub fn doubled(self) -> Self {
        Precision(self.0.saturating_mul(2))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::DEFAULT
    }
}

impl TryFrom<u32> for Precision {
    type Error = FibonacciError;

    fn try_from(digits: u32) -> Result<Self> {
        Precision::new(digits)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    raw: BigInt,
    digits: u32,
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = scale_for(self.digits);
        let (whole, fraction) = self.raw.abs().div_rem(&scale);
        let sign = if self.raw.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{whole}.{fraction:0>width$}",
            fraction = fraction.to_string(),
            width = self.digits as usize
        )
    }
}

fn scale_for(digits: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u32), digits as usize)
}

/// Arithmetic context: a precision plus its precomputed scale.
#[derive(Debug, Clone)]
pub struct DecimalContext {
    precision: Precision,
    scale: BigInt,
}

impl DecimalContext {
    pub fn new(precision: Precision) -> Self {
        DecimalContext {
            precision,
            scale: scale_for(precision.digits()),
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn fixed(&self, raw: BigInt) -> Fixed {
        Fixed {
            raw,
            digits: self.precision.digits(),
        }
    }

    pub fn integer(&self, value: &BigInt) -> Fixed {
        self.fixed(value * &self.scale)
    }

    pub fn one(&self) -> Fixed {
        self.fixed(self.scale.clone())
    }

    pub fn add(&self, lhs: &Fixed, rhs: &Fixed) -> Fixed {
        self.fixed(&lhs.raw + &rhs.raw)
    }

    pub fn sub(&self, lhs: &Fixed, rhs: &Fixed) -> Fixed {
        self.fixed(&lhs.raw - &rhs.raw)
    }

    pub fn mul(&self, lhs: &Fixed, rhs: &Fixed) -> Fixed {
        self.fixed((&lhs.raw * &rhs.raw).div_floor(&self.scale))
    }

    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div(&self, lhs: &Fixed, rhs: &Fixed) -> Fixed {
        self.fixed((&lhs.raw * &self.scale).div_floor(&rhs.raw))
    }

    /// Floor of the square root at this precision.
    ///
    /// # Panics
    /// Panics if `value` is negative.
    pub fn sqrt(&self, value: &Fixed) -> Fixed {
        self.fixed((&value.raw * &self.scale).sqrt())
    }

    pub fn halve(&self, value: &Fixed) -> Fixed {
        self.fixed(value.raw.div_floor(&BigInt::from(2u32)))
    }

    // Square-and-multiply, same shape as math::matrix_pow
    pub fn powi(&self, base: &Fixed, mut exp: u64) -> Fixed {
        let mut result = self.one();
        let mut base = base.clone();

        while exp > 0 {
            if exp % 2 == 1 {
                result = self.mul(&result, &base);
            }
            exp /= 2;
            if exp > 0 {
                base = self.mul(&base, &base);
            }
        }

        result
    }

    /// Nearest integer, ties to even.
    pub fn round(&self, value: &Fixed) -> BigInt {
        let (quotient, remainder) = value.raw.div_mod_floor(&self.scale);
        let twice = remainder * 2u32;
        match twice.cmp(&self.scale) {
            Ordering::Less => quotient,
            Ordering::Greater => quotient + BigInt::one(),
            Ordering::Equal if quotient.is_even() => quotient,
            Ordering::Equal => quotient + BigInt::one(),
        }
    }
}
