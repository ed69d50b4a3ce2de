pub mod ast;
pub mod ast_printer;
pub mod callable;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lox;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod token;
pub mod value;

pub use error::{LoxError, Result};
pub use lox::{Failure, Lox};
pub use output::Output;
pub use value::Value;
