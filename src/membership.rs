use num_bigint::BigInt;
use num_traits::Signed;

fn square_root(value: &BigInt) -> Option<BigInt> {
    if value.is_negative() {
        return None;
    }
    let root = value.sqrt();
    (&(&root * &root) == value).then_some(root)
}

// For s = F(n), 5s² + 4(−1)^n = L(n)², the n-th Lucas number.
// The minus form is tried first so that s = 1 resolves to F(1) rather than F(2).
fn lucas_root(value: &BigInt) -> Option<BigInt> {
    if value.is_negative() {
        return None;
    }
    let five_squared = value * value * 5u32;
    square_root(&(&five_squared - 4u32)).or_else(|| square_root(&(five_squared + 4u32)))
}

/// Whether `value` is a nonnegative Fibonacci number.
///
/// A nonnegative integer `s` belongs to the sequence iff `5s² + 4` or
/// `5s² − 4` is a perfect square.
///
/// # Example
/// ```
/// use merifib::membership::is_fibonacci;
/// use num_bigint::BigInt;
/// assert!(is_fibonacci(&BigInt::from(144)));
/// assert!(!is_fibonacci(&BigInt::from(100)));
/// ```
pub fn is_fibonacci(value: &BigInt) -> bool {
    lucas_root(value).is_some()
}

/// The term before `value` in the sequence, or `None` when `value` is not a
/// nonnegative Fibonacci number.
///
/// Exact at any size: `F(n−1) = (L(n) − F(n)) / 2`. For seeds above one this
/// equals `round(value / φ)`. `1` maps to `0` and `0` maps to `1`, so a walk
/// seeded at zero runs `0, 1, 1, 2, ...`.
///
/// # Example
/// ```
/// use merifib::membership::predecessor;
/// use num_bigint::BigInt;
/// assert_eq!(predecessor(&BigInt::from(55)), Some(BigInt::from(34)));
/// assert_eq!(predecessor(&BigInt::from(0)), Some(BigInt::from(1)));
/// assert_eq!(predecessor(&BigInt::from(4)), None);
/// ```
pub fn predecessor(value: &BigInt) -> Option<BigInt> {
    lucas_root(value).map(|root| (root - value) / 2u32)
}
