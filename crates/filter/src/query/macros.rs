/// Builds a column filter: `col!("id", "=", 1)` or `col!("email", "is null")`.
#[macro_export]
macro_rules! col {
    ($column:expr, $op:expr) => {
        $crate::query::ast::filter::Filter::Column(
            $crate::query::ast::column::ColumnFilter::unary($column, $op),
        )
    };
    ($column:expr, $op:expr, $value:expr) => {
        $crate::query::ast::filter::Filter::Column(
            $crate::query::ast::column::ColumnFilter::new($column, $op, $value),
        )
    };
}

/// `and![f1, f2, ...]`
#[macro_export]
macro_rules! and {
    ($($filter:expr),* $(,)?) => {
        $crate::query::ast::filter::Filter::and(vec![$($filter.into()),*])
    };
}

/// `or![f1, f2, ...]`
#[macro_export]
macro_rules! or {
    ($($filter:expr),* $(,)?) => {
        $crate::query::ast::filter::Filter::or(vec![$($filter.into()),*])
    };
}

/// `raw!("lower(name) = ?", "foo")`
#[macro_export]
macro_rules! raw {
    ($condition:expr $(, $arg:expr)* $(,)?) => {
        $crate::query::ast::filter::Filter::raw(
            $condition,
            vec![$($crate::model::core::value::Value::from($arg)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::query::ast::{column::ColumnFilter, filter::Filter};
    use model::core::value::Value;

    #[test]
    fn test_macros_build_the_same_tree() {
        let by_macro = crate::or![
            crate::col!("id", "=", 1),
            crate::and![crate::col!("email", "not null"), crate::raw!("age > ?", 18)],
        ];

        let by_hand = Filter::or(vec![
            Filter::col("id", "=", 1),
            Filter::and(vec![
                Filter::Column(ColumnFilter::unary("email", "not null")),
                Filter::raw("age > ?", vec![Value::Int(18)]),
            ]),
        ]);

        assert_eq!(by_macro, by_hand);
    }

    #[test]
    fn test_raw_without_arguments() {
        assert_eq!(crate::raw!("deleted = 0"), Filter::raw("deleted = 0", vec![]));
    }
}
