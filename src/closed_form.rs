//! Binet's formula evaluated with [`DecimalContext`] arithmetic.
//!
//! `F(n) = round((φ^n − (−φ)^(−n)) / √5)`. The result is exact as long as the
//! accumulated truncation error in `φ^n` stays below one half, which the
//! [`ClosedForm::audit`] check verifies against the exact matrix reference.

use std::sync::{Arc, OnceLock};

use num_bigint::BigInt;
use num_traits::Signed;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::decimal::{DecimalContext, Fixed, Precision};
use crate::error::{FibonacciError, Result};
use crate::math::exact_term;

static STANDARD: OnceLock<Arc<ClosedForm>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct ClosedForm {
    context: DecimalContext,
    sqrt5: Fixed,
    phi: Fixed,
}

impl ClosedForm {
    pub fn new(precision: Precision) -> Self {
        let context = DecimalContext::new(precision);
        let sqrt5 = context.sqrt(&context.integer(&BigInt::from(5u32)));
        let phi = context.halve(&context.add(&context.one(), &sqrt5));
        debug!(%precision, "computed golden ratio");

        ClosedForm {
            context,
            sqrt5,
            phi,
        }
    }

    /// Shared instance at [`Precision::DEFAULT`], computed once per process.
    pub fn standard() -> Arc<ClosedForm> {
        Arc::clone(STANDARD.get_or_init(|| Arc::new(ClosedForm::new(Precision::DEFAULT))))
    }

    /// Starts at [`Precision::DEFAULT`] and doubles the precision until
    /// [`audit`](Self::audit) passes for every position up to `max_position`.
    pub fn verified_for(max_position: u64) -> Result<Self> {
        let mut closed_form = ClosedForm::new(Precision::DEFAULT);
        loop {
            match closed_form.audit(max_position) {
                Ok(()) => return Ok(closed_form),
                Err(err) => {
                    let current = closed_form.precision();
                    let next = current.doubled();
                    if next == current {
                        return Err(err);
                    }
                    debug!(%current, %next, max_position, "raising closed form precision");
                    closed_form = ClosedForm::new(next);
                }
            }
        }
    }

    pub fn precision(&self) -> Precision {
        self.context.precision()
    }

    pub fn phi(&self) -> &Fixed {
        &self.phi
    }

    /// F(n) for zero-based `n`.
    pub fn term(&self, n: u64) -> BigInt {
        let ctx = &self.context;
        let phi_n = ctx.powi(&self.phi, n);
        let inverse = ctx.div(&ctx.one(), &phi_n);
        // (−φ)^(−n) is +φ^(−n) for even n and −φ^(−n) for odd n
        let numerator = if n % 2 == 0 {
            ctx.sub(&phi_n, &inverse)
        } else {
            ctx.add(&phi_n, &inverse)
        };
        ctx.round(&ctx.div(&numerator, &self.sqrt5))
    }

    /// The Fibonacci number at one-based `position`, so `nth(1)` is F(0) = 0.
    ///
    /// # Example
    /// ```
    /// use merifib::closed_form::ClosedForm;
    /// use num_bigint::BigInt;
    /// let closed_form = ClosedForm::standard();
    /// assert_eq!(closed_form.nth(11).unwrap(), BigInt::from(55));
    /// assert!(closed_form.nth(0).is_err());
    /// ```
    pub fn nth(&self, position: i64) -> Result<BigInt> {
        if position < 1 {
            return Err(FibonacciError::InvalidPosition(position));
        }
        Ok(self.term(position as u64 - 1))
    }

    /// Checks the closed form against exact matrix exponentiation for every
    /// position in `1..=max_position`, reporting the smallest mismatch.
    pub fn audit(&self, max_position: u64) -> Result<()> {
        let mismatch = (1..=max_position)
            .into_par_iter()
            .map(|position| {
                let expected = exact_term(position - 1);
                let computed = self.term(position - 1);
                (position, expected, computed)
            })
            .find_first(|(_, expected, computed)| {
                computed.is_negative() || computed.magnitude() != expected
            });

        match mismatch {
            None => {
                debug!(precision = %self.precision(), max_position, "closed form audit passed");
                Ok(())
            }
            Some((position, expected, computed)) => {
                debug!(precision = %self.precision(), position, "closed form audit failed");
                Err(FibonacciError::PrecisionExhausted {
                    position,
                    expected,
                    computed,
                })
            }
        }
    }
}
