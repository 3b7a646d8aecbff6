use crate::{
    error::ConstructionError,
    query::ast::{operand::Operand, operator::Operator},
};
use serde::{Deserialize, Serialize};

/// A condition on a single column, e.g. `age >= ?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column: String,
    pub operation: Operator,
    pub value: Operand,
}

impl ColumnFilter {
    /// `operation` may be any accepted spelling; it is canonicalized here.
    pub fn new(
        column: impl Into<String>,
        operation: impl Into<Operator>,
        value: impl Into<Operand>,
    ) -> Self {
        Self {
            column: column.into(),
            operation: operation.into(),
            value: value.into(),
        }
    }

    /// A filter that takes no value, such as `IS NULL`.
    pub fn unary(column: impl Into<String>, operation: impl Into<Operator>) -> Self {
        Self::new(column, operation, Operand::None)
    }

    /// Builds a filter from a positional spec: `[column, operation]` or
    /// `[column, operation, value]`.
    pub fn from_array(spec: &serde_json::Value) -> Result<Self, ConstructionError> {
        let items = spec
            .as_array()
            .ok_or_else(|| ConstructionError::NotAnArray(json_kind(spec)))?;

        if !(2..=3).contains(&items.len()) {
            return Err(ConstructionError::InvalidArity(items.len()));
        }

        let column = string_at(items, 0)?;
        let operation = string_at(items, 1)?;
        let value = items
            .get(2)
            .cloned()
            .map(Operand::from_json)
            .unwrap_or_default();

        Ok(Self::new(column, Operator::parse(operation), value))
    }
}

impl TryFrom<&serde_json::Value> for ColumnFilter {
    type Error = ConstructionError;

    fn try_from(spec: &serde_json::Value) -> Result<Self, Self::Error> {
        ColumnFilter::from_array(spec)
    }
}

fn string_at(items: &[serde_json::Value], position: usize) -> Result<&str, ConstructionError> {
    items[position]
        .as_str()
        .ok_or_else(|| ConstructionError::InvalidElement {
            position,
            expected: "a string",
            found: json_kind(&items[position]),
        })
}

pub(crate) fn json_kind(json: &serde_json::Value) -> String {
    match json {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => format!("boolean {b}"),
        serde_json::Value::Number(n) => format!("number {n}"),
        serde_json::Value::String(s) => format!("string \"{s}\""),
        serde_json::Value::Array(a) => format!("array of {} element(s)", a.len()),
        serde_json::Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnFilter;
    use crate::{
        error::ConstructionError,
        query::ast::{operand::Operand, operator::Operator},
    };
    use model::core::value::Value;
    use serde_json::json;

    #[test]
    fn test_from_array_with_value() {
        let filter = ColumnFilter::from_array(&json!(["id", "=", 123])).unwrap();
        assert_eq!(filter.column, "id");
        assert_eq!(filter.operation, Operator::Eq);
        assert_eq!(filter.value, Operand::Scalar(Value::Int(123)));
    }

    #[test]
    fn test_from_array_without_value() {
        let filter = ColumnFilter::from_array(&json!(["email", "not null"])).unwrap();
        assert_eq!(filter.operation, Operator::NotNull);
        assert_eq!(filter.value, Operand::None);
    }

    #[test]
    fn test_from_array_list_and_null_values() {
        let filter = ColumnFilter::from_array(&json!(["id", "in", [1, 2]])).unwrap();
        assert_eq!(filter.value, Operand::List(vec![Value::Int(1), Value::Int(2)]));

        let filter = ColumnFilter::from_array(&json!(["id", "=", null])).unwrap();
        assert_eq!(filter.value, Operand::Scalar(Value::Null));
        assert!(filter.value.is_null());
    }

    #[test]
    fn test_from_array_wrong_arity() {
        assert_eq!(
            ColumnFilter::from_array(&json!([1, 2, 3, 4, 5])),
            Err(ConstructionError::InvalidArity(5))
        );
        assert_eq!(
            ColumnFilter::from_array(&json!(["id"])),
            Err(ConstructionError::InvalidArity(1))
        );
    }

    #[test]
    fn test_from_array_wrong_types() {
        assert!(matches!(
            ColumnFilter::from_array(&json!(1)),
            Err(ConstructionError::NotAnArray(_))
        ));
        assert!(matches!(
            ColumnFilter::from_array(&json!([1, "="])),
            Err(ConstructionError::InvalidElement { position: 0, .. })
        ));
        assert!(matches!(
            ColumnFilter::from_array(&json!(["id", 5, 1])),
            Err(ConstructionError::InvalidElement { position: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_operation_is_accepted_at_construction() {
        let filter = ColumnFilter::new("test", "xxx", 1);
        assert_eq!(filter.operation, Operator::Unknown("XXX".to_string()));
    }
}
