//! Canonical column filter operators.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Serialized as its spelling, so deserialized filters go through the same
/// table as every other constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Operator {
    // Comparison
    Eq,    // =
    NotEq, // != or <>
    Lt,    // <
    Lte,   // <=
    Gt,    // >
    Gte,   // >=

    // Pattern
    Like,
    NotLike,
    ILike,

    // Membership
    In,
    NotIn,

    // Nullity
    IsNull,
    NotNull,

    // Range
    Between,

    /// A spelling outside the table. Kept so that rendering can report it.
    Unknown(String),
}

/// The fixed table of accepted spellings, after normalization.
fn canonical(normalized: &str) -> Option<Operator> {
    let op = match normalized {
        "=" => Operator::Eq,
        "!=" | "<>" => Operator::NotEq,
        "<" => Operator::Lt,
        "<=" => Operator::Lte,
        ">" => Operator::Gt,
        ">=" => Operator::Gte,
        "LIKE" => Operator::Like,
        "NOT LIKE" => Operator::NotLike,
        "ILIKE" => Operator::ILike,
        "IN" => Operator::In,
        "NOT IN" => Operator::NotIn,
        "IS NULL" => Operator::IsNull,
        "NOT NULL" | "IS NOT NULL" => Operator::NotNull,
        "BETWEEN" => Operator::Between,
        _ => return None,
    };
    Some(op)
}

impl Operator {
    /// Maps any accepted spelling to its canonical tag. Matching ignores
    /// case, surrounding whitespace and repeated inner whitespace.
    pub fn parse(spelling: &str) -> Self {
        let normalized = spelling
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();

        canonical(&normalized).unwrap_or(Operator::Unknown(normalized))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::ILike => "ILIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::NotNull => "IS NOT NULL",
            Operator::Between => "BETWEEN",
            Operator::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Operator::Unknown(_))
    }
}

impl FromStr for Operator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Operator::parse(s))
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Operator::parse(s)
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        Operator::parse(&s)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
