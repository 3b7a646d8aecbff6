//! Provides a fluent builder for constructing composite filters.

use crate::query::ast::{
    composite::{BoolOp, CompositeFilter},
    filter::{ColumnFilter, Filter, RawFilter},
    operand::Operand,
    operator::Operator,
};
use model::core::value::Value;

#[derive(Debug, Clone)]
pub struct FilterBuilder {
    ast: CompositeFilter,
}

impl FilterBuilder {
    pub fn new(operation: BoolOp) -> Self {
        Self {
            ast: CompositeFilter::new(operation, Vec::new()),
        }
    }

    pub fn and() -> Self {
        Self::new(BoolOp::And)
    }

    pub fn or() -> Self {
        Self::new(BoolOp::Or)
    }

    /// Adds any filter as the next child.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.ast.add(filter);
        self
    }

    /// Adds a column condition using any accepted operator spelling.
    pub fn cond(
        self,
        column: &str,
        operation: impl Into<Operator>,
        value: impl Into<Operand>,
    ) -> Self {
        self.filter(ColumnFilter::new(column, operation, value))
    }

    pub fn eq(self, column: &str, value: impl Into<Operand>) -> Self {
        self.cond(column, Operator::Eq, value)
    }

    pub fn not_eq(self, column: &str, value: impl Into<Operand>) -> Self {
        self.cond(column, Operator::NotEq, value)
    }

    pub fn like(self, column: &str, pattern: impl Into<Operand>) -> Self {
        self.cond(column, Operator::Like, pattern)
    }

    pub fn in_list<T, I>(self, column: &str, values: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        self.cond(column, Operator::In, Operand::list(values))
    }

    pub fn between(self, column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        self.cond(
            column,
            Operator::Between,
            Operand::List(vec![low.into(), high.into()]),
        )
    }

    pub fn is_null(self, column: &str) -> Self {
        self.filter(ColumnFilter::unary(column, Operator::IsNull))
    }

    pub fn not_null(self, column: &str) -> Self {
        self.filter(ColumnFilter::unary(column, Operator::NotNull))
    }

    pub fn raw(self, condition: &str, arguments: Vec<Value>) -> Self {
        self.filter(RawFilter::new(condition, arguments))
    }

    /// Adds a nested group built by another builder.
    pub fn group(self, group: FilterBuilder) -> Self {
        self.filter(group.build())
    }

    /// Finalizes and returns the constructed filter.
    pub fn build(self) -> Filter {
        Filter::Composite(self.ast)
    }
}
