use crate::{error::ConstructionError, query::ast::filter::Filter};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
        }
    }
}

impl FromStr for BoolOp {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(BoolOp::And),
            "OR" => Ok(BoolOp::Or),
            _ => Err(ConstructionError::InvalidCompositeOperation(s.to_string())),
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An AND / OR over an ordered list of child filters.
///
/// An empty composite can be built and extended, but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeFilter {
    pub operation: BoolOp,
    pub filters: Vec<Filter>,
}

impl CompositeFilter {
    pub fn new(operation: BoolOp, filters: Vec<Filter>) -> Self {
        Self {
            operation,
            filters,
        }
    }

    /// Parses the boolean operator from its spelling (`and`, `OR`, ...).
    pub fn parse(operation: &str, filters: Vec<Filter>) -> Result<Self, ConstructionError> {
        Ok(Self::new(operation.parse()?, filters))
    }

    /// Builds a composite from untyped child specs. Each spec goes through
    /// [`Filter::from_json`], so positional arrays become column filters.
    pub fn from_specs(
        operation: BoolOp,
        specs: &[serde_json::Value],
    ) -> Result<Self, ConstructionError> {
        let filters = specs
            .iter()
            .map(Filter::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(operation, filters))
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::new(BoolOp::And, filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::new(BoolOp::Or, filters)
    }

    pub fn add(&mut self, filter: impl Into<Filter>) {
        self.filters.push(filter.into());
    }

    /// Returns a copy of this composite with `filter` appended.
    pub fn with(&self, filter: impl Into<Filter>) -> Self {
        let mut next = self.clone();
        next.add(filter);
        next
    }

    /// Appends a child given as an untyped spec.
    pub fn add_spec(&mut self, spec: &serde_json::Value) -> Result<(), ConstructionError> {
        self.filters.push(Filter::from_json(spec)?);
        Ok(())
    }

    pub fn operation(&self) -> BoolOp {
        self.operation
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoolOp, CompositeFilter};
    use crate::{
        error::ConstructionError,
        query::ast::{column::ColumnFilter, filter::Filter},
    };
    use serde_json::json;

    #[test]
    fn test_bool_op_parsing() {
        assert_eq!("and".parse::<BoolOp>(), Ok(BoolOp::And));
        assert_eq!(" Or ".parse::<BoolOp>(), Ok(BoolOp::Or));
        assert_eq!(
            "foo".parse::<BoolOp>(),
            Err(ConstructionError::InvalidCompositeOperation("foo".to_string()))
        );
    }

    #[test]
    fn test_invalid_operation_message() {
        let err = CompositeFilter::parse("foo", vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid composite filter operation [foo]. Expected one of: AND, OR"
        );
    }

    #[test]
    fn test_from_specs_upgrades_arrays() {
        let composite = CompositeFilter::from_specs(
            BoolOp::Or,
            &[json!(["id", "=", 1]), json!(["id", "=", 2])],
        )
        .unwrap();

        assert_eq!(
            composite.filters(),
            &[
                Filter::Column(ColumnFilter::new("id", "=", 1)),
                Filter::Column(ColumnFilter::new("id", "=", 2)),
            ]
        );
    }

    #[test]
    fn test_add_spec_rejects_invalid_child() {
        let mut composite = CompositeFilter::and(vec![]);
        let err = composite.add_spec(&json!(1)).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidChild(_)));
        assert!(composite.is_empty());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let empty = CompositeFilter::and(vec![]);
        let one = empty.with(ColumnFilter::new("a", "=", 1));
        assert!(empty.is_empty());
        assert_eq!(one.filters().len(), 1);
        assert_eq!(one.operation(), BoolOp::And);
    }
}
