//! Defines the rendering trait and the renderer that turns a filter tree into
//! a parameterized SQL fragment.

use crate::{
    error::RenderError,
    query::{ast::filter::Filter, quoter::Quoter, segment::QuerySegment},
};
use tracing::debug;

pub mod column;
pub mod composite;
pub mod raw;

/// A trait for any filter node that can be rendered into a SQL segment.
pub trait RenderFilter {
    fn render(&self, renderer: &FilterRenderer) -> Result<QuerySegment, RenderError>;
}

/// Renders filters using the quoting rules of one dialect.
///
/// Holds nothing but a shared reference to the quoter, so one renderer can
/// be used from many threads at once.
#[derive(Clone, Copy)]
pub struct FilterRenderer<'a> {
    quoter: &'a dyn Quoter,
}

impl<'a> FilterRenderer<'a> {
    pub fn new(quoter: &'a dyn Quoter) -> Self {
        Self { quoter }
    }

    pub fn quote(&self, ident: &str) -> String {
        self.quoter.quote(ident)
    }

    /// Renders `filter` into SQL text with `?` placeholders and the values
    /// to bind, in placeholder order.
    pub fn render_filter(&self, filter: &Filter) -> Result<QuerySegment, RenderError> {
        let segment = filter.render(self)?;
        debug!(
            kind = filter.kind(),
            quoter = self.quoter.name(),
            placeholders = segment.placeholder_count(),
            args = segment.args().len(),
            "Rendered filter: {}",
            segment.text()
        );
        Ok(segment)
    }

    /// Same as [`render_filter`](Self::render_filter), prefixed with `WHERE`.
    pub fn render_where(&self, filter: &Filter) -> Result<QuerySegment, RenderError> {
        let condition = self.render_filter(filter)?;
        Ok(QuerySegment::text_only("WHERE").combine(condition))
    }
}

impl std::fmt::Debug for FilterRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRenderer")
            .field("quoter", &self.quoter.name())
            .finish()
    }
}

impl RenderFilter for Filter {
    fn render(&self, renderer: &FilterRenderer) -> Result<QuerySegment, RenderError> {
        match self {
            Filter::Column(f) => f.render(renderer),
            Filter::Composite(f) => f.render(renderer),
            Filter::Raw(f) => f.render(renderer),
        }
    }
}
