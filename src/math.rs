use num_bigint::BigUint;
use num_traits::{One, Zero};

// Q-matrix [[F(n+1), F(n)], [F(n), F(n-1)]]
#[derive(Clone)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    pub fn fibonacci() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }
}

pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: &m1.a * &m2.a + &m1.b * &m2.c,
        b: &m1.a * &m2.b + &m1.b * &m2.d,
        c: &m1.c * &m2.a + &m1.d * &m2.c,
        d: &m1.c * &m2.b + &m1.d * &m2.d,
    }
}

// Exponentiation by squaring, O(log n) multiplications
pub fn matrix_pow(mut base: Matrix, mut exp: u64) -> Matrix {
    let mut result = Matrix::identity();

    while exp > 0 {
        if exp % 2 == 1 {
            result = matrix_mult(&result, &base);
        }
        base = matrix_mult(&base, &base);
        exp /= 2;
    }

    result
}

/// Exact F(n) for zero-based `n`, used as the reference the closed form is
/// audited against.
///
/// # Example
/// ```
/// use merifib::math::exact_term;
/// use num_bigint::BigUint;
/// assert_eq!(exact_term(10), BigUint::from(55u32));
/// ```
pub fn exact_term(n: u64) -> BigUint {
    matrix_pow(Matrix::fibonacci(), n).b
}
