//! # Fibonacci Sequence Explorer
//!
//! This library models the Fibonacci sequence over arbitrary-precision integers. It validates
//! whether a number belongs to the sequence, generates finite or unbounded sequences forward and
//! backward from a seed, computes the n-th term directly with Binet's formula, and summarizes
//! finite sequences.
//!
//! ## Key Features
//! - **Seeded Generation**: Sequences start from any Fibonacci number, not only from zero.
//! - **Backward Walks**: Negative lengths extend the sequence leftward, ending at the seed.
//! - **Lazy Sequences**: An unbounded length yields an iterator that computes one term per pull.
//! - **Closed Form**: The n-th term is evaluated with Binet's formula in fixed-point decimal
//!   arithmetic whose precision is an explicit, tunable value.
//! - **Precision Audit**: The closed form can be checked in parallel against exact matrix
//!   exponentiation, and the precision raised until it agrees.
//!
//! ## Overview of Modules
//!
//! ### `engine`
//! `SequenceEngine` owns a validated seed and length and produces sequences, term lookups and
//! reports.
//!
//! ### `closed_form`
//! `ClosedForm` holds φ and √5 at a given precision. `ClosedForm::standard()` is the shared
//! process-wide instance at the default precision of 300 fractional digits.
//!
//! ### `decimal`
//! Fixed-point arithmetic on `BigInt` with round-half-to-even conversion back to integers.
//!
//! ### `math`
//! Exact Q-matrix exponentiation, the reference the closed form is audited against.
//!
//! ### `membership`
//! The `5s² ± 4` perfect-square test for Fibonacci numbers.
//!
//! ### `report`
//! The `{sequence, sum, evens, odds}` summary and its JSON encoding.
//!
//! ### Errors
//! - `FibonacciError`: invalid seeds, lengths, positions, summaries of unbounded sequences, and
//!   precision problems.
//!
//! ## Usage Example
//! ```rust
//! use merifib::{Length, SequenceEngine};
//! use num_bigint::BigInt;
//!
//! let engine = SequenceEngine::new(10, 0).unwrap();
//! let report = engine.report().unwrap();
//! assert_eq!(
//!     report.to_json().unwrap(),
//!     r#"{"sequence":[0,1,1,2,3,5,8,13,21,34],"sum":88,"evens":4,"odds":6}"#
//! );
//!
//! let lazy = SequenceEngine::new(Length::Unbounded, 55).unwrap();
//! let terms: Vec<BigInt> = lazy.sequence().into_terms().unwrap().take(3).collect();
//! assert_eq!(terms, vec![BigInt::from(55), BigInt::from(89), BigInt::from(144)]);
//! ```

pub mod closed_form;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod math;
pub mod membership;
pub mod report;

pub use closed_form::ClosedForm;
pub use decimal::Precision;
pub use engine::{Length, Sequence, SequenceEngine, SequenceEngineBuilder, Terms};
pub use error::{FibonacciError, Result};
pub use report::Report;
