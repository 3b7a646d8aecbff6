//! Renderer settings that callers can keep in their own configuration files.

use crate::query::{quoter::QuoteStyle, renderer::FilterRenderer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// How column names are quoted, e.g. `"ansi"` or `"mysql"`.
    pub quote_style: QuoteStyle,
}

impl RendererConfig {
    pub fn new(quote_style: QuoteStyle) -> Self {
        Self { quote_style }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A renderer borrowing this config's quoting style.
    pub fn renderer(&self) -> FilterRenderer<'_> {
        FilterRenderer::new(&self.quote_style)
    }
}
