//! Summary of a finite sequence: its terms, their sum and parity counts.
//!
//! Integers are written as JSON numbers of any size, never as strings or
//! floats, e.g.
//! `{"sequence":[0,1,1,2,3,5,8,13,21,34],"sum":88,"evens":4,"odds":6}`.

use num_bigint::BigInt;
use num_integer::Integer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(with = "json_integers")]
    pub sequence: Vec<BigInt>,
    #[serde(with = "json_integer")]
    pub sum: BigInt,
    pub evens: usize,
    pub odds: usize,
}

impl Report {
    pub fn from_terms(sequence: Vec<BigInt>) -> Self {
        let sum = sequence.iter().sum();
        let evens = sequence.iter().filter(|term| term.is_even()).count();
        let odds = sequence.len() - evens;

        Report {
            sequence,
            sum,
            evens,
            odds,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a report without recomputing `sum`, `evens` or `odds`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

mod json_integer {
    use num_bigint::BigInt;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Number;

    pub(super) fn to_number(value: &BigInt) -> serde_json::Result<Number> {
        value.to_string().parse()
    }

    pub(super) fn from_number<E: de::Error>(number: &Number) -> Result<BigInt, E> {
        let digits = number.to_string();
        BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| E::custom(format!("expected an integer, found {digits}")))
    }

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        to_number(value)
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        from_number(&Number::deserialize(deserializer)?)
    }
}

mod json_integers {
    use num_bigint::BigInt;
    use serde::{ser, Deserialize, Deserializer, Serializer};
    use serde_json::Number;

    use super::json_integer::{from_number, to_number};

    pub fn serialize<S: Serializer>(values: &[BigInt], serializer: S) -> Result<S::Ok, S::Error> {
        let numbers = values
            .iter()
            .map(to_number)
            .collect::<serde_json::Result<Vec<Number>>>()
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.collect_seq(numbers)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BigInt>, D::Error> {
        Vec::<Number>::deserialize(deserializer)?
            .iter()
            .map(from_number)
            .collect()
    }
}
