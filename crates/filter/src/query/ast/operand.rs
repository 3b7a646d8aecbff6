use model::core::value::Value;
use serde::{Deserialize, Serialize};

/// The value side of a column filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// No value given, e.g. `["email", "is null"]`.
    #[default]
    None,
    Scalar(Value),
    List(Vec<Value>),
}

impl Operand {
    pub fn scalar(value: impl Into<Value>) -> Self {
        Operand::Scalar(value.into())
    }

    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Operand::List(values.into_iter().map(Into::into).collect())
    }

    /// True for a missing value and for an explicit `NULL`.
    pub fn is_null(&self) -> bool {
        match self {
            Operand::None => true,
            Operand::Scalar(v) => v.is_null(),
            Operand::List(_) => false,
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Operand::None => "no value".to_string(),
            Operand::Scalar(v) => format!("scalar {v}"),
            Operand::List(vs) => format!("{} value(s)", vs.len()),
        }
    }

    /// Upgrades the 3rd element of a positional spec.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Array(items) => {
                Operand::List(items.into_iter().map(Value::from_json).collect())
            }
            other => Operand::Scalar(Value::from_json(other)),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(value.into())
                }
            }
        )*
    };
}

impl_scalar_from!(Value, i32, i64, u32, u64, f64, bool, &str, String);

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::list(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Operand {
    fn from(values: [T; N]) -> Self {
        Operand::list(values)
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Operand::Scalar(value.map_or(Value::Null, Into::into))
    }
}

impl<T: Into<Value>> FromIterator<T> for Operand {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Operand::list(iter)
    }
}
