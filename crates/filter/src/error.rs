use thiserror::Error;

/// Malformed filter input, detected while building the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A positional column filter spec was not an array.
    #[error("Invalid filter specification: expected an array, got {0}")]
    NotAnArray(String),

    /// A positional column filter spec had the wrong number of elements.
    #[error("Invalid filter specification: expected 2 or 3 elements, got {0}")]
    InvalidArity(usize),

    /// An element of a positional spec had the wrong type.
    #[error("Invalid filter specification: element {position} must be {expected}, got {found}")]
    InvalidElement {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid composite filter operation [{0}]. Expected one of: AND, OR")]
    InvalidCompositeOperation(String),

    /// Something that cannot be upgraded into a filter was given as a child.
    #[error("Invalid filter: cannot build a filter from {0}")]
    InvalidChild(String),
}

/// A filter tree that is well formed but cannot be turned into SQL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Cannot render composite filter: no filters defined")]
    EmptyComposite,

    #[error("Unknown filter operation [{operation}] on column [{column}]")]
    UnknownOperation { column: String, operation: String },

    #[error("{operation} filter on column [{column}] requires an array with one or more values")]
    ListRequired {
        column: String,
        operation: String,
    },

    #[error("BETWEEN filter on column [{column}] requires an array of two values, got {found}")]
    BetweenRequiresTwo { column: String, found: String },

    #[error("{operation} filter on column [{column}] requires a single value")]
    ScalarRequired {
        column: String,
        operation: String,
    },
}

/// Top-level error for callers that go from untyped input straight to SQL.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to build filter: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Failed to render filter: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to parse filter JSON: {0}")]
    Json(#[from] serde_json::Error),
}
