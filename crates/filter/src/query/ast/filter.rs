//! The filter tree.

use crate::{
    error::{ConstructionError, FilterError},
    query::ast::{
        column::json_kind,
        composite::{BoolOp, CompositeFilter},
        operand::Operand,
        operator::Operator,
    },
};
use model::core::value::Value;
use serde::{Deserialize, Serialize};

pub use crate::query::ast::{column::ColumnFilter, raw::RawFilter};

/// A node in a WHERE condition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// A condition on a single column, e.g. `id = ?`.
    Column(ColumnFilter),

    /// An AND / OR of child filters, e.g. `(a = ? OR b = ?)`.
    Composite(CompositeFilter),

    /// Caller-authored SQL passed through untouched.
    Raw(RawFilter),
}

impl Filter {
    pub fn col(
        column: impl Into<String>,
        operation: impl Into<Operator>,
        value: impl Into<Operand>,
    ) -> Self {
        Filter::Column(ColumnFilter::new(column, operation, value))
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::Composite(CompositeFilter::new(BoolOp::And, filters))
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Composite(CompositeFilter::new(BoolOp::Or, filters))
    }

    pub fn raw(condition: impl Into<String>, arguments: Vec<Value>) -> Self {
        Filter::Raw(RawFilter::new(condition, arguments))
    }

    /// Upgrades an untyped spec into a filter tree.
    ///
    /// - `["col", "op"]` / `["col", "op", value]` -> column filter
    /// - `{"and": [spec, ...]}` / `{"or": [spec, ...]}` -> composite
    /// - `{"raw": "sql", "args": [...]}` -> raw filter
    pub fn from_json(spec: &serde_json::Value) -> Result<Self, ConstructionError> {
        match spec {
            serde_json::Value::Array(_) => ColumnFilter::from_array(spec).map(Filter::Column),
            serde_json::Value::Object(map) => {
                if let Some(condition) = map.get("raw") {
                    return raw_from_json(condition, map.get("args"));
                }

                let mut entries = map.iter();
                match (entries.next(), entries.next()) {
                    (Some((key, children)), None) => {
                        let operation: BoolOp = key.parse()?;
                        let children = children.as_array().ok_or_else(|| {
                            ConstructionError::InvalidChild(format!(
                                "{operation} with {}",
                                json_kind(children)
                            ))
                        })?;
                        CompositeFilter::from_specs(operation, children).map(Filter::Composite)
                    }
                    _ => Err(ConstructionError::InvalidChild(format!(
                        "object with keys [{}]",
                        map.keys().cloned().collect::<Vec<_>>().join(", ")
                    ))),
                }
            }
            other => Err(ConstructionError::InvalidChild(json_kind(other))),
        }
    }

    /// Parses a JSON document and upgrades it with [`Filter::from_json`].
    pub fn from_json_str(json: &str) -> Result<Self, FilterError> {
        let spec: serde_json::Value = serde_json::from_str(json)?;
        Ok(Filter::from_json(&spec)?)
    }

    /// Returns a deduplicated, sorted list of the columns referenced by
    /// structured filters. Raw conditions are opaque and not inspected.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = match self {
            Filter::Column(f) => vec![f.column.clone()],
            Filter::Composite(f) => f.filters.iter().flat_map(|c| c.columns()).collect(),
            Filter::Raw(_) => Vec::new(),
        };
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Filter::Column(_) => "column",
            Filter::Composite(_) => "composite",
            Filter::Raw(_) => "raw",
        }
    }
}

fn raw_from_json(
    condition: &serde_json::Value,
    args: Option<&serde_json::Value>,
) -> Result<Filter, ConstructionError> {
    let condition = condition.as_str().ok_or_else(|| {
        ConstructionError::InvalidChild(format!("raw condition {}", json_kind(condition)))
    })?;

    let arguments = match args {
        None => Vec::new(),
        Some(serde_json::Value::Array(items)) => {
            items.iter().cloned().map(Value::from_json).collect()
        }
        Some(other) => {
            return Err(ConstructionError::InvalidChild(format!(
                "raw arguments {}",
                json_kind(other)
            )));
        }
    };

    Ok(Filter::raw(condition, arguments))
}

impl From<ColumnFilter> for Filter {
    fn from(f: ColumnFilter) -> Self {
        Filter::Column(f)
    }
}

impl From<CompositeFilter> for Filter {
    fn from(f: CompositeFilter) -> Self {
        Filter::Composite(f)
    }
}

impl From<RawFilter> for Filter {
    fn from(f: RawFilter) -> Self {
        Filter::Raw(f)
    }
}

impl TryFrom<&serde_json::Value> for Filter {
    type Error = ConstructionError;

    fn try_from(spec: &serde_json::Value) -> Result<Self, Self::Error> {
        Filter::from_json(spec)
    }
}
