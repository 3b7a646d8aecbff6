use model::core::value::Value;
use serde::{Deserialize, Serialize};

/// A caller-authored SQL condition with its own bound arguments.
///
/// The condition is emitted as is; it is the caller's job to keep user
/// input in `arguments` and out of `condition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFilter {
    pub condition: String,
    pub arguments: Vec<Value>,
}

impl RawFilter {
    pub fn new(condition: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            condition: condition.into(),
            arguments,
        }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}
