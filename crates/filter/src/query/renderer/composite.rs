use crate::{
    error::RenderError,
    query::{
        ast::{composite::CompositeFilter, filter::Filter},
        renderer::{FilterRenderer, RenderFilter},
        segment::QuerySegment,
    },
};
use tracing::trace;

/// Chains of single-child groups are unwrapped in a loop. Any other nesting
/// recurses once per level, so such trees are limited by the thread's stack
/// (roughly a thousand levels on a 2 MiB stack).
impl RenderFilter for CompositeFilter {
    fn render(&self, r: &FilterRenderer) -> Result<QuerySegment, RenderError> {
        let mut current = self;
        loop {
            trace!(
                operation = %current.operation,
                children = current.filters.len(),
                "Rendering composite filter"
            );

            match current.filters.as_slice() {
                [] => return Err(RenderError::EmptyComposite),
                // A single child needs no grouping.
                [Filter::Composite(inner)] => current = inner,
                [only] => return only.render(r),
                children => {
                    let segments = children
                        .iter()
                        .map(|child| child.render(r))
                        .collect::<Result<Vec<_>, _>>()?;

                    let separator = QuerySegment::text_only(current.operation.as_str());
                    let imploded = QuerySegment::implode(&separator, segments);
                    return Ok(QuerySegment::embrace(imploded));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RenderError,
        query::{
            ast::{
                composite::{BoolOp, CompositeFilter},
                filter::Filter,
            },
            quoter::PlainQuoter,
            renderer::FilterRenderer,
        },
    };
    use model::core::value::Value;
    use serde_json::json;

    fn render(filter: &Filter) -> Result<(String, Vec<Value>), RenderError> {
        let quoter = PlainQuoter;
        FilterRenderer::new(&quoter)
            .render_filter(filter)
            .map(|s| s.into_parts())
    }

    #[test]
    fn test_or_of_three() {
        let filter = Filter::or(vec![
            Filter::col("id", "=", 1),
            Filter::col("id", "=", 2),
            Filter::col("id", "=", 3),
        ]);
        assert_eq!(
            render(&filter).unwrap(),
            (
                "(id = ? OR id = ? OR id = ?)".to_string(),
                vec![Value::Int(1), Value::Int(2), Value::Int(3)]
            )
        );
    }

    #[test]
    fn test_from_array_specs() {
        let composite = CompositeFilter::from_specs(
            BoolOp::Or,
            &[json!(["id", "=", 1]), json!(["id", "=", 2]), json!(["id", "=", 3])],
        )
        .unwrap();
        let (text, args) = render(&composite.into()).unwrap();
        assert_eq!(text, "(id = ? OR id = ? OR id = ?)");
        assert_eq!(args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_single_child_is_transparent() {
        let child = Filter::col("a", "in", [1, 2]);
        let wrapped = Filter::and(vec![child.clone()]);
        assert_eq!(render(&wrapped), render(&child));
    }

    #[test]
    fn test_empty_composite_fails() {
        let err = render(&Filter::and(vec![])).unwrap_err();
        assert_eq!(err, RenderError::EmptyComposite);
        assert_eq!(
            err.to_string(),
            "Cannot render composite filter: no filters defined"
        );
    }

    #[test]
    fn test_nested_empty_composite_fails() {
        let filter = Filter::and(vec![Filter::col("a", "=", 1), Filter::or(vec![])]);
        assert_eq!(render(&filter), Err(RenderError::EmptyComposite));
    }

    #[test]
    fn test_nested_groups_keep_precedence_and_order() {
        let filter = Filter::or(vec![
            Filter::and(vec![Filter::col("a", "=", 1), Filter::col("b", "between", [2, 3])]),
            Filter::and(vec![
                Filter::raw("c > ?", vec![Value::Int(4)]),
                Filter::col("d", "is null", None::<i64>),
            ]),
            Filter::col("e", "not in", [5, 6]),
        ]);

        let (text, args) = render(&filter).unwrap();
        assert_eq!(
            text,
            "((a = ? AND b BETWEEN ? AND ?) OR (c > ? AND d IS NULL) OR e NOT IN (?, ?))"
        );
        assert_eq!(args, (1..=6).map(Value::Int).collect::<Vec<_>>());
    }

    #[test]
    fn test_child_error_propagates() {
        let filter = Filter::and(vec![Filter::col("a", "=", 1), Filter::col("b", "xxx", 1)]);
        assert!(matches!(
            render(&filter),
            Err(RenderError::UnknownOperation { ref column, .. }) if column == "b"
        ));
    }

    #[test]
    fn test_deep_single_child_chain() {
        let mut filter = Filter::col("a", "=", 1);
        for depth in 0..2500 {
            filter = if depth % 2 == 0 {
                Filter::and(vec![filter])
            } else {
                Filter::or(vec![filter])
            };
        }
        assert_eq!(
            render(&filter).unwrap(),
            ("a = ?".to_string(), vec![Value::Int(1)])
        );

        let mut empty = Filter::and(vec![]);
        for _ in 0..2500 {
            empty = Filter::or(vec![empty]);
        }
        assert_eq!(render(&empty), Err(RenderError::EmptyComposite));
    }
}
