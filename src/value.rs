use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::callable::{LoxCallable, LoxClass, LoxFunction, LoxInstance, NativeFunction};

/// A Lox runtime value.
///
/// Scalars are stored inline; callables and instances are reference
/// counted so that copies of a value alias the same object.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Native(Rc<NativeFunction>),
    Function(Rc<LoxFunction>),
    Class(Rc<LoxClass>),
    Instance(Rc<RefCell<LoxInstance>>),
}

impl Value {
    /// `nil` and `false` are falsy; everything else, `0` and `""` included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// View this value as something that can be called, if it is one.
    pub fn as_callable(&self) -> Option<&dyn LoxCallable> {
        match self {
            Value::Native(f) => Some(&**f as &dyn LoxCallable),
            Value::Function(f) => Some(&**f as &dyn LoxCallable),
            Value::Class(c) => Some(c as &dyn LoxCallable),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Value equality for scalars and strings, identity for everything else.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Numbers at or beyond this magnitude print in exponent form.
const EXPONENT_ABOVE: f64 = 1e15;

/// Non-zero numbers below this magnitude print in exponent form.
const EXPONENT_BELOW: f64 = 1e-5;

/// Shortest round-trip digits as `1.5E+20` / `1E-05`.
fn write_exponent(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted: String = format!("{:e}", n);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign: char = if exponent < 0 { '-' } else { '+' };

            write!(f, "{}E{}{:02}", mantissa, sign, exponent.abs())
        }
        None => write!(f, "{}", formatted),
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude: f64 = n.abs();

    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        write_exponent(f, n)
    } else if n.fract() == 0.0 {
        write!(f, "{:.0}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Number(n) => write_number(f, *n),

            Value::String(s) => write!(f, "{}", s),

            Value::Native(_) => write!(f, "<native fn>"),

            Value::Function(func) => write!(f, "<fn {}>", func.name()),

            Value::Class(class) => write!(f, "{}", class.name),

            Value::Instance(instance) => match instance.try_borrow() {
                Ok(instance) => write!(f, "{} instance", instance.class().name),
                Err(_) => write!(f, "<instance>"),
            },
        }
    }
}

/// Debug output never walks into closures or fields, which may be cyclic.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}
