pub mod ast;
pub mod builder;
pub mod macros;
pub mod quoter;
pub mod renderer;
pub mod segment;
