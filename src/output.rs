//! Where `print` statements go.
//!
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: an in-memory string, for tests and embedders that need to
//!   inspect what a program printed

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub enum Output {
    #[default]
    Stdout,
    Buffer(Rc<RefCell<String>>),
}

impl Output {
    /// A fresh capturing output.  Clones share the same buffer.
    pub fn buffer() -> Self {
        Output::Buffer(Rc::new(RefCell::new(String::new())))
    }

    /// Write one line.
    pub fn println(&self, line: &str) -> io::Result<()> {
        match self {
            Output::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)
            }

            Output::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(line);
                buffer.push('\n');
                Ok(())
            }
        }
    }

    /// Everything captured so far; always empty for stdout.
    pub fn contents(&self) -> String {
        match self {
            Output::Stdout => String::new(),
            Output::Buffer(buffer) => buffer.borrow().clone(),
        }
    }

    pub fn clear(&self) {
        if let Output::Buffer(buffer) = self {
            buffer.borrow_mut().clear();
        }
    }
}
