//! Runtime variable bindings: one frame per lexical scope, chained to the
//! enclosing frame.  Frames are shared (`Rc<RefCell<_>>`): a closure, a bound
//! method and a running call may all hold the same frame, and a write through
//! any of them is seen by all.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;

/// Shared handle to a frame.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

fn undefined(name: &Token) -> LoxError {
    LoxError::runtime(name, format!("Undefined variable '{}'.", name.lexeme))
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Wrap this frame in a shared handle.
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    pub fn enclosing(&self) -> Option<EnvRef> {
        self.enclosing.clone()
    }

    /// Bind `name` in this frame, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: Value) {
        debug!("define '{}' = {:?}", name, value);

        self.values.insert(name.to_string(), value);
    }

    /// Look `name` up here, then in each enclosing frame.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            Err(undefined(name))
        }
    }

    /// Overwrite an existing binding here or in the nearest enclosing frame.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// The frame `distance` hops up the chain from `env` (0 is `env` itself).
    pub fn ancestor(env: &EnvRef, distance: usize) -> Option<EnvRef> {
        let mut frame: EnvRef = Rc::clone(env);

        for _ in 0..distance {
            let parent: EnvRef = frame.borrow().enclosing()?;
            frame = parent;
        }

        Some(frame)
    }

    /// Read a binding straight out of the frame `distance` hops away.
    pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Value> {
        Self::lookup_at(env, distance, &name.lexeme).ok_or_else(|| undefined(name))
    }

    /// Like [`Environment::get_at`] for names with no source token (`this`, `super`).
    pub fn lookup_at(env: &EnvRef, distance: usize, name: &str) -> Option<Value> {
        let frame: EnvRef = Self::ancestor(env, distance)?;
        let value: Option<Value> = frame.borrow().values.get(name).cloned();
        value
    }

    pub fn assign_at(env: &EnvRef, distance: usize, name: &Token, value: Value) -> Result<()> {
        let frame: EnvRef = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        frame.borrow_mut().define(&name.lexeme, value);
        Ok(())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();

        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_enclosing", &self.enclosing.is_some())
            .finish()
    }
}
