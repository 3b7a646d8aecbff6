#![allow(dead_code)]

use filter::{Filter, FilterError, FilterRenderer, PlainQuoter, QuerySegment, Quoter, RenderError};
use model::core::value::Value;


/// Renders with unquoted identifiers, the form most assertions are written in.
pub fn render(filter: &Filter) -> Result<(String, Vec<Value>), RenderError> {
    render_with(filter, &PlainQuoter)
}

pub fn render_with(
    filter: &Filter,
    quoter: &dyn Quoter,
) -> Result<(String, Vec<Value>), RenderError> {
    FilterRenderer::new(quoter)
        .render_filter(filter)
        .map(QuerySegment::into_parts)
}

/// Goes from a JSON filter document straight to SQL.
pub fn render_json(json: &str) -> Result<(String, Vec<Value>), FilterError> {
    let filter = Filter::from_json_str(json)?;
    Ok(render(&filter)?)
}

pub fn ints(values: impl IntoIterator<Item = i64>) -> Vec<Value> {
    values.into_iter().map(Value::Int).collect()
}

/// Number of `?` markers in rendered text.
pub fn placeholders(text: &str) -> usize {
    text.matches('?').count()
}
