pub mod config;
pub mod error;
pub mod query;

pub use model;

pub use error::{ConstructionError, FilterError, RenderError};
pub use query::{
    ast::{
        composite::{BoolOp, CompositeFilter},
        filter::{ColumnFilter, Filter, RawFilter},
        operand::Operand,
        operator::Operator,
    },
    builder::FilterBuilder,
    quoter::{AnsiQuoter, MsSqlQuoter, MySqlQuoter, PlainQuoter, QuoteStyle, Quoter},
    renderer::{FilterRenderer, RenderFilter},
    segment::QuerySegment,
};
