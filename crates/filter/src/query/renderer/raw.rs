use crate::{
    error::RenderError,
    query::{
        ast::raw::RawFilter,
        renderer::{FilterRenderer, RenderFilter},
        segment::QuerySegment,
    },
};
use tracing::trace;

impl RenderFilter for RawFilter {
    fn render(&self, _r: &FilterRenderer) -> Result<QuerySegment, RenderError> {
        trace!(args = self.arguments.len(), "Passing raw filter through");
        Ok(QuerySegment::new(
            self.condition.clone(),
            self.arguments.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ast::filter::Filter, quoter::AnsiQuoter, renderer::FilterRenderer};
    use model::core::value::Value;

    #[test]
    fn test_raw_is_passed_through() {
        // Quoting never touches raw conditions.
        let quoter = AnsiQuoter;
        let segment = FilterRenderer::new(&quoter)
            .render_filter(&Filter::raw("lower(name) = ?", vec![Value::from("foo")]))
            .unwrap();
        assert_eq!(segment.text(), "lower(name) = ?");
        assert_eq!(segment.args(), &[Value::from("foo")]);
    }
}
