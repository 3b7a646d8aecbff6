//! Defines the filter tree and its building blocks.

pub mod column;
pub mod composite;
pub mod filter;
pub mod operand;
pub mod operator;
pub mod raw;
