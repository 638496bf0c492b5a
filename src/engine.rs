//! Seeded Fibonacci sequences.
//!
//! A [`SequenceEngine`] is built from a seed (which must itself be a
//! Fibonacci number) and a [`Length`]. Positive lengths walk forward from the
//! seed, negative lengths walk backward ending at the seed, and
//! [`Length::Unbounded`] yields a lazy iterator.

use std::iter::FusedIterator;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::closed_form::ClosedForm;
use crate::decimal::Precision;
use crate::error::{FibonacciError, Result};
use crate::membership;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    /// Number of terms. Negative values walk backward from the seed.
    Finite(i64),
    #[default]
    Unbounded,
}

impl From<i64> for Length {
    fn from(length: i64) -> Self {
        Length::Finite(length)
    }
}

impl From<i32> for Length {
    fn from(length: i32) -> Self {
        Length::Finite(i64::from(length))
    }
}

/// Result of [`SequenceEngine::sequence`]; the shape depends on the length.
#[derive(Debug, Clone)]
pub enum Sequence {
    Finite(Vec<BigInt>),
    Unbounded(Terms),
}

impl Sequence {
    pub fn is_finite(&self) -> bool {
        matches!(self, Sequence::Finite(_))
    }

    pub fn into_finite(self) -> Option<Vec<BigInt>> {
        match self {
            Sequence::Finite(terms) => Some(terms),
            Sequence::Unbounded(_) => None,
        }
    }

    pub fn into_terms(self) -> Option<Terms> {
        match self {
            Sequence::Finite(_) => None,
            Sequence::Unbounded(terms) => Some(terms),
        }
    }
}

/// Endless forward walk. Holds only the last two terms.
#[derive(Debug, Clone)]
pub struct Terms {
    a: BigInt,
    b: BigInt,
}

impl Iterator for Terms {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let next = &self.a + &self.b;
        let current = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Terms {}

#[derive(Debug, Clone)]
pub struct SequenceEngine {
    seed: BigInt,
    prev: BigInt,
    length: Length,
    closed_form: Arc<ClosedForm>,
}

impl SequenceEngine {
    /// Validates and builds an engine backed by [`ClosedForm::standard`].
    ///
    /// # Example
    /// ```
    /// use merifib::engine::SequenceEngine;
    /// use num_bigint::BigInt;
    /// let engine = SequenceEngine::new(6, 55).unwrap();
    /// let terms = engine.sequence().into_finite().unwrap();
    /// assert_eq!(terms.last(), Some(&BigInt::from(610)));
    ///
    /// assert!(SequenceEngine::new(6, 56).is_err());
    /// assert!(SequenceEngine::new(0, 55).is_err());
    /// ```
    pub fn new(length: impl Into<Length>, seed: impl Into<BigInt>) -> Result<Self> {
        Self::with_closed_form(length.into(), seed.into(), ClosedForm::standard())
    }

    pub fn builder() -> SequenceEngineBuilder {
        SequenceEngineBuilder::default()
    }

    fn with_closed_form(length: Length, seed: BigInt, closed_form: Arc<ClosedForm>) -> Result<Self> {
        let Some(prev) = membership::predecessor(&seed) else {
            debug!(%seed, "rejected seed");
            return Err(FibonacciError::InvalidSeed(seed));
        };
        if length == Length::Finite(0) {
            debug!("rejected zero length");
            return Err(FibonacciError::InvalidLength);
        }
        debug!(%seed, ?length, precision = %closed_form.precision(), "sequence engine ready");

        Ok(SequenceEngine {
            seed,
            prev,
            length,
            closed_form,
        })
    }

    pub fn seed(&self) -> &BigInt {
        &self.seed
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /// Closed form carrying this engine's precision, for term lookups that
    /// should not use the shared default.
    pub fn closed_form(&self) -> &Arc<ClosedForm> {
        &self.closed_form
    }

    pub fn sequence(&self) -> Sequence {
        let prev = self.prev.clone();
        let a = self.seed.clone();

        let length = match self.length {
            Length::Unbounded => {
                let b = &a + &prev;
                return Sequence::Unbounded(Terms { a, b });
            }
            Length::Finite(length) => length,
        };
        let count = length.unsigned_abs();
        trace!(%a, %prev, length, "generating finite sequence");

        if count == 1 {
            return Sequence::Finite(vec![a]);
        }

        let capacity = usize::try_from(count).unwrap_or(usize::MAX).min(4096);
        let mut terms = Vec::with_capacity(capacity);

        if length > 0 {
            let mut a = a;
            let mut b = &a + &prev;
            terms.push(a.clone());
            terms.push(b.clone());
            for _ in 2..count {
                let next = &a + &b;
                a = std::mem::replace(&mut b, next);
                terms.push(b.clone());
            }
        } else {
            // Built seed-first, reversed at the end so the earliest term leads
            let mut a = a;
            let mut b = prev;
            terms.push(a.clone());
            terms.push(b.clone());
            for _ in 2..count {
                let next = &a - &b;
                a = std::mem::replace(&mut b, next);
                terms.push(b.clone());
            }
            terms.reverse();
        }

        Sequence::Finite(terms)
    }

    /// Fibonacci number at one-based `position`, independent of any engine.
    ///
    /// # Example
    /// ```
    /// use merifib::engine::SequenceEngine;
    /// use num_bigint::BigInt;
    /// assert_eq!(SequenceEngine::nth(1).unwrap(), BigInt::from(0));
    /// assert_eq!(SequenceEngine::nth(13).unwrap(), BigInt::from(144));
    /// ```
    pub fn nth(position: i64) -> Result<BigInt> {
        ClosedForm::standard().nth(position)
    }

    /// Sum and parity summary of the finite sequence.
    pub fn report(&self) -> Result<Report> {
        match self.sequence() {
            Sequence::Finite(terms) => Ok(Report::from_terms(terms)),
            Sequence::Unbounded(_) => Err(FibonacciError::UndefinedLength),
        }
    }
}

impl Default for SequenceEngine {
    fn default() -> Self {
        SequenceEngine {
            seed: BigInt::zero(),
            prev: BigInt::one(),
            length: Length::Unbounded,
            closed_form: ClosedForm::standard(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SequenceEngineBuilder {
    length: Length,
    seed: BigInt,
    precision: Option<Precision>,
    closed_form: Option<Arc<ClosedForm>>,
}

impl SequenceEngineBuilder {
    pub fn length(mut self, length: impl Into<Length>) -> Self {
        self.length = length.into();
        self
    }

    pub fn seed(mut self, seed: impl Into<BigInt>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Builds a dedicated [`ClosedForm`] at this precision. Ignored when
    /// [`closed_form`](Self::closed_form) is also set.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn closed_form(mut self, closed_form: Arc<ClosedForm>) -> Self {
        self.closed_form = Some(closed_form);
        self
    }

    pub fn build(self) -> Result<SequenceEngine> {
        let closed_form = match (self.closed_form, self.precision) {
            (Some(closed_form), _) => closed_form,
            (None, Some(precision)) if precision != Precision::DEFAULT => {
                Arc::new(ClosedForm::new(precision))
            }
            (None, _) => ClosedForm::standard(),
        };
        SequenceEngine::with_closed_form(self.length, self.seed, closed_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::exact_term;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    fn finite(length: i64, seed: i64) -> Vec<BigInt> {
        SequenceEngine::new(length, seed)
            .unwrap()
            .sequence()
            .into_finite()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let engine = SequenceEngine::default();
        assert_eq!(engine.seed(), &BigInt::zero());
        assert_eq!(engine.length(), Length::Unbounded);
        assert!(!engine.sequence().is_finite());
    }

    #[test]
    fn test_invalid_seed() {
        assert_eq!(
            SequenceEngine::new(10, 4).unwrap_err(),
            FibonacciError::InvalidSeed(BigInt::from(4))
        );
        assert_eq!(
            SequenceEngine::new(10, -1).unwrap_err(),
            FibonacciError::InvalidSeed(BigInt::from(-1))
        );
    }

    #[test]
    fn test_seed_checked_before_length() {
        assert_eq!(
            SequenceEngine::new(0, 4).unwrap_err(),
            FibonacciError::InvalidSeed(BigInt::from(4))
        );
        assert_eq!(SequenceEngine::new(0, 5).unwrap_err(), FibonacciError::InvalidLength);
    }

    #[test]
    fn test_forward_from_zero() {
        assert_eq!(finite(10, 0), ints(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
    }

    #[test]
    fn test_forward_from_one() {
        assert_eq!(finite(5, 1), ints(&[1, 1, 2, 3, 5]));
    }

    #[test]
    fn test_forward_from_seed() {
        assert_eq!(finite(6, 55), ints(&[55, 89, 144, 233, 377, 610]));
        assert_eq!(finite(2, 13), ints(&[13, 21]));
    }

    #[test]
    fn test_single_term() {
        assert_eq!(finite(1, 21), ints(&[21]));
        assert_eq!(finite(-1, 21), ints(&[21]));
    }

    #[test]
    fn test_backward_walk() {
        assert_eq!(finite(-10, 5), ints(&[-3, 2, -1, 1, 0, 1, 1, 2, 3, 5]));
        assert_eq!(finite(-2, 5), ints(&[3, 5]));
        assert_eq!(finite(-4, 0), ints(&[2, -1, 1, 0]));
    }

    #[test]
    fn test_unbounded_matches_finite_prefix() {
        for seed in [0i64, 1, 2, 8, 55, 6765] {
            let engine = SequenceEngine::new(Length::Unbounded, seed).unwrap();
            let pulled: Vec<BigInt> = engine.sequence().into_terms().unwrap().take(10).collect();
            assert_eq!(pulled, finite(10, seed), "seed {seed}");
        }
    }

    #[test]
    fn test_terms_keep_going() {
        let mut terms = SequenceEngine::default().sequence().into_terms().unwrap();
        let hundredth = terms.nth(99).unwrap();
        assert_eq!(hundredth.to_string(), "218922995834555169026");
        assert_eq!(terms.next(), Some(BigInt::parse_bytes(b"354224848179261915075", 10).unwrap()));
    }

    #[test]
    fn test_report_requires_finite_length() {
        assert_eq!(
            SequenceEngine::default().report().unwrap_err(),
            FibonacciError::UndefinedLength
        );
    }

    #[test]
    fn test_builder_with_precision() {
        let engine = SequenceEngine::builder()
            .length(4)
            .seed(89)
            .precision(Precision::new(50).unwrap())
            .build()
            .unwrap();
        assert_eq!(engine.closed_form().precision().digits(), 50);
        assert_eq!(
            engine.sequence().into_finite().unwrap(),
            ints(&[89, 144, 233, 377])
        );
    }

    #[test]
    fn test_builder_shares_standard_closed_form() {
        let engine = SequenceEngine::builder().seed(3).length(3).build().unwrap();
        assert!(Arc::ptr_eq(engine.closed_form(), &ClosedForm::standard()));
        assert!(SequenceEngine::builder().seed(7).build().is_err());
    }

    #[test]
    fn test_large_seed() {
        let seed = BigInt::from(crate::math::exact_term(400));
        let engine = SequenceEngine::new(3, seed.clone()).unwrap();
        let terms = engine.sequence().into_finite().unwrap();
        assert_eq!(terms[1], BigInt::from(crate::math::exact_term(401)));
        assert_eq!(terms[2], BigInt::from(crate::math::exact_term(402)));
    }

    #[test]
    fn test_seed_wider_than_default_precision() {
        let engine = SequenceEngine::new(3, BigInt::from(exact_term(1500))).unwrap();
        let terms = engine.sequence().into_finite().unwrap();
        let expected: Vec<BigInt> = (1500..1503).map(|n| BigInt::from(exact_term(n))).collect();
        assert_eq!(terms, expected);
    }

    #[test]
    fn test_seed_wider_than_builder_precision() {
        let engine = SequenceEngine::builder()
            .length(3)
            .seed(832040)
            .precision(Precision::new(5).unwrap())
            .build()
            .unwrap();
        assert_eq!(
            engine.sequence().into_finite().unwrap(),
            ints(&[832040, 1346269, 2178309])
        );
        assert_eq!(engine.closed_form().precision().digits(), 5);
    }

    #[test]
    fn test_backward_walk_from_large_seed() {
        let seed = BigInt::from(exact_term(1500));
        let terms = SequenceEngine::new(-5, seed.clone())
            .unwrap()
            .sequence()
            .into_finite()
            .unwrap();
        assert_eq!(terms.len(), 5);
        assert_eq!(terms[4], seed);
        for window in terms.windows(3) {
            assert_eq!(&window[0] + &window[1], window[2]);
        }
        assert_eq!(terms[0], BigInt::from(exact_term(1496)));
    }
}
