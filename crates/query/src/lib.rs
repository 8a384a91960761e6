#[macro_use]
pub mod macros;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod error;
pub mod renderer;
