//! SQL text paired with the values bound to its placeholders.

use model::core::value::Value;
use std::fmt;

/// The placeholder every rendered fragment uses.
pub const PLACEHOLDER: char = '?';

/// An immutable piece of SQL and its positional arguments.
///
/// The arguments are ordered exactly as the `?` placeholders appear in the
/// text, left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySegment {
    text: String,
    args: Vec<Value>,
}

impl QuerySegment {
    pub fn new(text: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            text: text.into(),
            args,
        }
    }

    /// A segment with no bound values, e.g. `AND` or `x IS NULL`.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Consumes the segment and returns the text and arguments.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.args)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.args.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.text.matches(PLACEHOLDER).count()
    }

    /// Wraps the text in parentheses.
    pub fn embrace(segment: QuerySegment) -> QuerySegment {
        QuerySegment {
            text: format!("({})", segment.text),
            args: segment.args,
        }
    }

    /// Joins segments with `separator` between each pair.
    ///
    /// Arguments are concatenated in the same order the texts are joined,
    /// the separator's own arguments (if any) included at each junction.
    /// An empty input yields an empty segment.
    pub fn implode(separator: &QuerySegment, segments: Vec<QuerySegment>) -> QuerySegment {
        let mut out = QuerySegment::default();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                out.text.push(' ');
                out.text.push_str(&separator.text);
                out.text.push(' ');
                out.args.extend_from_slice(&separator.args);
            }
            out.text.push_str(&segment.text);
            out.args.extend(segment.args);
        }
        out
    }

    /// Appends `other` after a single space.
    pub fn combine(self, other: QuerySegment) -> QuerySegment {
        if self.text.is_empty() {
            return QuerySegment {
                text: other.text,
                args: [self.args, other.args].concat(),
            };
        }
        let mut out = self;
        if !other.text.is_empty() {
            out.text.push(' ');
            out.text.push_str(&other.text);
        }
        out.args.extend(other.args);
        out
    }
}

impl fmt::Display for QuerySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<QuerySegment> for (String, Vec<Value>) {
    fn from(segment: QuerySegment) -> Self {
        segment.into_parts()
    }
}
