//! Tree-walking evaluator.
//!
//! Statements run against a chain of [`Environment`] frames rooted in one
//! global frame created by [`Interpreter::new`].  Variable references that the
//! resolver annotated jump straight to the recorded ancestor frame; the rest
//! are looked up dynamically in the globals.
//!
//! `return` is not an error: statement execution yields a [`Flow`], and a
//! `Flow::Return` travels up through blocks, loops and ifs until the function
//! call that owns it turns it back into a value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use log::{debug, info};

use crate::ast::{Expr, ExprId, FunctionDecl, LiteralValue, Stmt};
use crate::callable::{LoxClass, LoxFunction, LoxInstance, NativeFunction, INITIALIZER};
use crate::environment::{EnvRef, Environment};
use crate::error::{LoxError, Result};
use crate::output::Output;
use crate::token::{Token, TokenType};
use crate::value::Value;

/// How a statement finished.
#[derive(Debug)]
pub enum Flow {
    /// Fell off the end; carry on with the next statement.
    Normal,

    /// A `return` is unwinding towards the nearest call boundary.
    Return(Value),
}

/// Seconds since the Unix epoch, with sub-second precision.
fn clock(_args: &[Value]) -> Value {
    let micros: i64 = Utc::now().timestamp_micros();
    Value::Number(micros as f64 / 1_000_000.0)
}

pub struct Interpreter {
    globals: EnvRef,
    environment: EnvRef,
    locals: HashMap<ExprId, usize>,
    output: Output,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a new Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    /// Creates a new Interpreter and defines native functions such as `clock`.
    pub fn with_output(output: Output) -> Self {
        info!("Initializing Interpreter");

        let globals: EnvRef = Environment::new().into_ref();

        debug!("Defining native function 'clock'");

        globals.borrow_mut().define(
            "clock",
            Value::Native(Rc::new(NativeFunction {
                name: "clock",
                arity: 0,
                func: clock,
            })),
        );

        Self {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Record that the name at `id` lives `depth` frames above the one
    /// active when it is evaluated.  Called by the resolver.
    pub fn resolve(&mut self, id: ExprId, depth: usize) {
        debug!("Noting {:?} at depth {}", id, depth);

        self.locals.insert(id, depth);
    }

    /// Interprets a list of statements (a "program").  The first runtime
    /// error stops the run; side effects already performed stand.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        debug!("Interpreting {} statements", statements.len());

        for stmt in statements {
            if let Flow::Return(value) = self.execute(stmt)? {
                // The resolver rejects top-level returns; stop quietly if one
                // slips through an unresolved run.
                debug!("Top-level return of {}, stopping", value);
                break;
            }
        }

        info!("Interpretation completed successfully");

        Ok(())
    }

    // ───────────────────────────── statements ─────────────────────────────

    /// Executes a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }

            Stmt::Print(expr) => {
                let value: Value = self.evaluate(expr)?;
                self.output.println(&value.to_string())?;

                debug!("Printed value: {}", value);

                Ok(Flow::Normal)
            }

            Stmt::Var { name, initializer } => {
                let value: Value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let frame = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, frame.into_ref())
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }

                Ok(Flow::Normal)
            }

            Stmt::Function(declaration) => {
                debug!("Defining function '{}'", declaration.name.lexeme);

                let function =
                    LoxFunction::new(Rc::clone(declaration), Rc::clone(&self.environment), false);

                self.environment.borrow_mut().define(
                    &declaration.name.lexeme,
                    Value::Function(Rc::new(function)),
                );

                Ok(Flow::Normal)
            }

            Stmt::Return { value, .. } => {
                let value: Value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                debug!("Returning value: {}", value);

                Ok(Flow::Return(value))
            }

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                self.execute_class(name, superclass.as_ref(), methods)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// Run `statements` with `environment` as the innermost frame, restoring
    /// the previous frame afterwards whether or not they succeed.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: EnvRef) -> Result<Flow> {
        let previous: EnvRef = std::mem::replace(&mut self.environment, environment);

        let result: Result<Flow> = self.execute_all(statements);

        self.environment = previous;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> Result<Flow> {
        for stmt in statements {
            if let Flow::Return(value) = self.execute(stmt)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    fn execute_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[Rc<FunctionDecl>],
    ) -> Result<()> {
        debug!("Declaring class '{}'", name.lexeme);

        let superclass: Option<Rc<LoxClass>> = match superclass {
            Some(expr) => match self.evaluate(expr)? {
                Value::Class(class) => Some(class),
                _ => {
                    let token: &Token = match expr {
                        Expr::Variable {
                            name: super_name, ..
                        } => super_name,
                        _ => name,
                    };

                    return Err(LoxError::runtime(token, "Superclass must be a class."));
                }
            },
            None => None,
        };

        self.environment
            .borrow_mut()
            .define(&name.lexeme, Value::Nil);

        // Methods close over a frame holding `super` when there is one.
        let method_env: EnvRef = match &superclass {
            Some(class) => {
                let mut frame = Environment::with_enclosing(Rc::clone(&self.environment));
                frame.define("super", Value::Class(Rc::clone(class)));
                frame.into_ref()
            }
            None => Rc::clone(&self.environment),
        };

        let mut table: HashMap<String, Rc<LoxFunction>> = HashMap::new();

        for method in methods {
            let is_initializer: bool = method.name.lexeme == INITIALIZER;
            let function =
                LoxFunction::new(Rc::clone(method), Rc::clone(&method_env), is_initializer);

            // A later method with the same name replaces an earlier one.
            table.insert(method.name.lexeme.clone(), Rc::new(function));
        }

        let class = LoxClass::new(name.lexeme.clone(), superclass, table);

        self.environment
            .borrow_mut()
            .assign(name, Value::Class(Rc::new(class)))?;

        info!("Class '{}' defined", name.lexeme);

        Ok(())
    }

    // ──────────────────────────── expressions ─────────────────────────────

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::String(s.clone()),
                LiteralValue::True => Value::Bool(true),
                LiteralValue::False => Value::Bool(false),
                LiteralValue::Nil => Value::Nil,
            }),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left: Value = self.evaluate(left)?;

                let decided: bool = if operator.token_type == TokenType::OR {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };

                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }

            Expr::Variable { id, name } => self.look_up_variable(name, *id),

            Expr::Assign { id, name, value } => {
                let value: Value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => {
                        Environment::assign_at(&self.environment, distance, name, value.clone())?
                    }
                    None => self.globals.borrow_mut().assign(name, value.clone())?,
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.evaluate_call(callee, paren, arguments),

            Expr::Get { object, name } => match self.evaluate(object)? {
                Value::Instance(instance) => LoxInstance::get(&instance, name),
                _ => Err(LoxError::runtime(name, "Only instances have properties.")),
            },

            Expr::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(LoxError::runtime(name, "Only instances have fields."));
                };

                let value: Value = self.evaluate(value)?;
                instance.borrow_mut().set(name, value.clone());

                Ok(value)
            }

            Expr::This { id, keyword } => self.look_up_variable(keyword, *id),

            Expr::Super {
                id,
                keyword,
                method,
            } => self.evaluate_super(*id, keyword, method),
        }
    }

    fn look_up_variable(&self, name: &Token, id: ExprId) -> Result<Value> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Result<Value> {
        let right: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::BANG => Ok(Value::Bool(!right.is_truthy())),

            TokenType::MINUS => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(LoxError::runtime(operator, "Operand must be a number.")),
            },

            _ => Err(LoxError::runtime(operator, "Invalid unary operator.")),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Result<Value> {
        let left: Value = self.evaluate(left)?;
        let right: Value = self.evaluate(right)?;

        debug!("Binary '{}' on {:?} and {:?}", operator.lexeme, left, right);

        match operator.token_type {
            TokenType::EQUAL_EQUAL => Ok(Value::Bool(left == right)),
            TokenType::BANG_EQUAL => Ok(Value::Bool(left != right)),

            TokenType::PLUS => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(LoxError::runtime(
                    operator,
                    "Operands must be two numbers or two strings.",
                )),
            },

            _ => {
                let (a, b) = number_operands(operator, &left, &right)?;

                match operator.token_type {
                    TokenType::MINUS => Ok(Value::Number(a - b)),
                    TokenType::STAR => Ok(Value::Number(a * b)),
                    // IEEE semantics: x / 0 is ±Infinity or NaN.
                    TokenType::SLASH => Ok(Value::Number(a / b)),
                    TokenType::GREATER => Ok(Value::Bool(a > b)),
                    TokenType::GREATER_EQUAL => Ok(Value::Bool(a >= b)),
                    TokenType::LESS => Ok(Value::Bool(a < b)),
                    TokenType::LESS_EQUAL => Ok(Value::Bool(a <= b)),
                    _ => Err(LoxError::runtime(operator, "Invalid binary operator.")),
                }
            }
        }
    }

    fn evaluate_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> Result<Value> {
        let callee: Value = self.evaluate(callee)?;

        let mut values: Vec<Value> = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        let Some(callable) = callee.as_callable() else {
            return Err(LoxError::runtime(
                paren,
                "Can only call functions and classes.",
            ));
        };

        if values.len() != callable.arity() {
            return Err(LoxError::runtime(
                paren,
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    values.len()
                ),
            ));
        }

        debug!("Calling {} with {} argument(s)", callee, values.len());

        callable.call(self, values)
    }

    fn evaluate_super(&mut self, id: ExprId, keyword: &Token, method: &Token) -> Result<Value> {
        let misplaced = || LoxError::runtime(keyword, "Can't use 'super' here.");

        let distance: usize = self.locals.get(&id).copied().ok_or_else(misplaced)?;

        // `this` lives in the frame just inside the one holding `super`.
        let superclass: Rc<LoxClass> =
            match Environment::lookup_at(&self.environment, distance, "super") {
                Some(Value::Class(class)) => class,
                _ => return Err(misplaced()),
            };

        let instance: Rc<RefCell<LoxInstance>> = match distance
            .checked_sub(1)
            .and_then(|d| Environment::lookup_at(&self.environment, d, "this"))
        {
            Some(Value::Instance(instance)) => instance,
            _ => return Err(misplaced()),
        };

        match superclass.find_method(&method.lexeme) {
            Some(found) => Ok(Value::Function(Rc::new(found.bind(instance)))),
            None => Err(LoxError::runtime(
                method,
                format!("Undefined property '{}'.", method.lexeme),
            )),
        }
    }
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(LoxError::runtime(operator, "Operands must be numbers.")),
    }
}
