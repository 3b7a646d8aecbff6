use crate::{
    error::RenderError,
    query::{
        ast::{column::ColumnFilter, operand::Operand, operator::Operator},
        renderer::{FilterRenderer, RenderFilter},
        segment::QuerySegment,
    },
};
use model::core::value::Value;
use tracing::{trace, warn};

impl RenderFilter for ColumnFilter {
    fn render(&self, r: &FilterRenderer) -> Result<QuerySegment, RenderError> {
        let column = r.quote(&self.column);
        trace!(column = %self.column, operation = %self.operation, "Rendering column filter");

        match &self.operation {
            Operator::Eq if self.value.is_null() => Ok(is_null(&column)),
            Operator::NotEq if self.value.is_null() => Ok(not_null(&column)),
            Operator::Eq
            | Operator::NotEq
            | Operator::Lt
            | Operator::Lte
            | Operator::Gt
            | Operator::Gte
            | Operator::Like
            | Operator::NotLike => {
                let value = self.scalar()?;
                Ok(simple(&column, &self.operation, value))
            }
            Operator::ILike => {
                let value = self.scalar()?;
                Ok(like_case_insensitive(&column, value))
            }
            Operator::In | Operator::NotIn => {
                let values = self.non_empty_list()?;
                Ok(in_list(&column, &self.operation, values))
            }
            Operator::IsNull => Ok(is_null(&column)),
            Operator::NotNull => Ok(not_null(&column)),
            Operator::Between => {
                let (low, high) = self.bounds()?;
                Ok(between(&column, low, high))
            }
            Operator::Unknown(operation) => {
                warn!(column = %self.column, "Rejecting unknown filter operation [{operation}]");
                Err(RenderError::UnknownOperation {
                    column: self.column.clone(),
                    operation: operation.clone(),
                })
            }
        }
    }
}

impl ColumnFilter {
    fn scalar(&self) -> Result<&Value, RenderError> {
        match &self.value {
            Operand::Scalar(v) => Ok(v),
            _ => Err(RenderError::ScalarRequired {
                column: self.column.clone(),
                operation: self.operation.to_string(),
            }),
        }
    }

    fn non_empty_list(&self) -> Result<&[Value], RenderError> {
        match &self.value {
            Operand::List(values) if !values.is_empty() => Ok(values),
            _ => Err(RenderError::ListRequired {
                column: self.column.clone(),
                operation: self.operation.to_string(),
            }),
        }
    }

    fn bounds(&self) -> Result<(&Value, &Value), RenderError> {
        match &self.value {
            Operand::List(values) if values.len() == 2 => Ok((&values[0], &values[1])),
            other => Err(RenderError::BetweenRequiresTwo {
                column: self.column.clone(),
                found: other.describe(),
            }),
        }
    }
}

/// `<column> <operator> ?`
fn simple(column: &str, operation: &Operator, value: &Value) -> QuerySegment {
    QuerySegment::new(
        format!("{column} {} ?", operation.as_str()),
        vec![value.clone()],
    )
}

fn like_case_insensitive(column: &str, value: &Value) -> QuerySegment {
    QuerySegment::new(format!("lower({column}) LIKE lower(?)"), vec![value.clone()])
}

fn in_list(column: &str, operation: &Operator, values: &[Value]) -> QuerySegment {
    let placeholders = vec!["?"; values.len()].join(", ");
    QuerySegment::new(
        format!("{column} {} ({placeholders})", operation.as_str()),
        values.to_vec(),
    )
}

fn between(column: &str, low: &Value, high: &Value) -> QuerySegment {
    QuerySegment::new(
        format!("{column} BETWEEN ? AND ?"),
        vec![low.clone(), high.clone()],
    )
}

fn is_null(column: &str) -> QuerySegment {
    QuerySegment::text_only(format!("{column} IS NULL"))
}

fn not_null(column: &str) -> QuerySegment {
    QuerySegment::text_only(format!("{column} IS NOT NULL"))
}
