//! The scan → parse → resolve → interpret pipeline, and the exit status each
//! way it can fail.

use log::{debug, info};
use thiserror::Error;

use crate::ast::{ExprId, Stmt};
use crate::error::LoxError;
use crate::interpreter::Interpreter;
use crate::output::Output;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::scan;
use crate::token::Token;
use crate::value::Value;

/// Exit status for syntax and static errors.
pub const EXIT_STATIC: i32 = 65;

/// Exit status for a runtime error.
pub const EXIT_RUNTIME: i32 = 70;

fn render(errors: &[LoxError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Why a run did not complete.
#[derive(Debug, Error)]
pub enum Failure {
    /// Lexical, syntax or resolution errors; nothing was executed.
    #[error("{}", render(.0))]
    Static(Vec<LoxError>),

    /// Execution started and was halted by this error.
    #[error("{0}")]
    Runtime(LoxError),
}

impl Failure {
    pub fn exit_code(&self) -> i32 {
        match self {
            Failure::Static(_) => EXIT_STATIC,
            Failure::Runtime(_) => EXIT_RUNTIME,
        }
    }

    pub fn errors(&self) -> &[LoxError] {
        match self {
            Failure::Static(errors) => errors,
            Failure::Runtime(error) => std::slice::from_ref(error),
        }
    }
}

/// An interpreter session.  Globals persist across calls to [`Lox::run`],
/// which is what an interactive prompt needs.
///
/// Resolved scope distances also persist (closures from earlier runs still
/// use them), so expression ids are numbered across the whole session.
pub struct Lox {
    interpreter: Interpreter,
    next_id: ExprId,
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}

impl Lox {
    pub fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    pub fn with_output(output: Output) -> Self {
        Self {
            interpreter: Interpreter::with_output(output),
            next_id: ExprId(0),
        }
    }

    /// A parser over `tokens` whose ids continue where the last one stopped.
    fn parser(&self, tokens: Vec<Token>) -> Parser {
        Parser::with_first_id(tokens, self.next_id)
    }

    /// Front end only: scan and parse `source` into statements.
    pub fn parse(&mut self, source: &str) -> Result<Vec<Stmt>, Failure> {
        let (tokens, mut errors) = scan(source);

        let mut parser: Parser = self.parser(tokens);
        let parsed = parser.parse();
        self.next_id = parser.next_id();

        match parsed {
            Ok(statements) if errors.is_empty() => Ok(statements),
            Ok(_) => Err(Failure::Static(errors)),
            Err(parse_errors) => {
                errors.extend(parse_errors);
                Err(Failure::Static(errors))
            }
        }
    }

    /// Run a whole program.
    pub fn run(&mut self, source: &str) -> Result<(), Failure> {
        info!("Running program of {} bytes", source.len());

        let statements: Vec<Stmt> = self.parse(source)?;

        debug!("Parsed {} statements", statements.len());

        Resolver::new(&mut self.interpreter)
            .resolve(&statements)
            .map_err(Failure::Static)?;

        self.interpreter
            .interpret(&statements)
            .map_err(Failure::Runtime)
    }

    /// Evaluate `source` as one expression against the global scope.
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Failure> {
        let (tokens, mut errors) = scan(source);

        let mut parser: Parser = self.parser(tokens);
        let parsed = parser.parse_expression();
        self.next_id = parser.next_id();

        let expr = match parsed {
            Ok(expr) if errors.is_empty() => expr,
            Ok(_) => return Err(Failure::Static(errors)),
            Err(parse_errors) => {
                errors.extend(parse_errors);
                return Err(Failure::Static(errors));
            }
        };

        self.interpreter.evaluate(&expr).map_err(Failure::Runtime)
    }
}
