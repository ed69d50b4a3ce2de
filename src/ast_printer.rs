use std::fmt::Write;

use crate::ast::{Expr, LiteralValue};

/// Renders an expression in parenthesised prefix form, e.g.
/// `(* (- 123.0) (group 45.67))`.  Used by the `parse` command.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        let mut out = String::new();
        Self::write_expr(&mut out, expr);
        out
    }

    fn write_expr(out: &mut String, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => Self::write_literal(out, literal),

            Expr::Grouping(inner) => Self::parenthesize(out, "group", &[], &[inner.as_ref()]),

            Expr::Unary { operator, right } => {
                Self::parenthesize(out, &operator.lexeme, &[], &[right.as_ref()])
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => Self::parenthesize(
                out,
                &operator.lexeme,
                &[],
                &[left.as_ref(), right.as_ref()],
            ),

            Expr::Variable { name, .. } => out.push_str(&name.lexeme),

            Expr::Assign { name, value, .. } => {
                Self::parenthesize(out, "=", &[name.lexeme.as_str()], &[value.as_ref()])
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut operands: Vec<&Expr> = Vec::with_capacity(arguments.len() + 1);
                operands.push(callee);
                operands.extend(arguments.iter());

                Self::parenthesize(out, "call", &[], &operands);
            }

            Expr::Get { object, name } => {
                // The object comes before the property name.
                out.push_str("(. ");
                Self::write_expr(out, object);
                let _ = write!(out, " {})", name.lexeme);
            }

            Expr::Set {
                object,
                name,
                value,
            } => {
                out.push_str("(=. ");
                Self::write_expr(out, object);
                let _ = write!(out, " {} ", name.lexeme);
                Self::write_expr(out, value);
                out.push(')');
            }

            Expr::This { .. } => out.push_str("this"),

            Expr::Super { method, .. } => {
                Self::parenthesize(out, "super", &[method.lexeme.as_str()], &[])
            }
        }
    }

    /// `(head word… expr…)`
    fn parenthesize(out: &mut String, head: &str, words: &[&str], operands: &[&Expr]) {
        out.push('(');
        out.push_str(head);

        for word in words {
            out.push(' ');
            out.push_str(word);
        }

        for operand in operands {
            out.push(' ');
            Self::write_expr(out, operand);
        }

        out.push(')');
    }

    fn write_literal(out: &mut String, literal: &LiteralValue) {
        // Writing into a String cannot fail.
        let _ = match literal {
            LiteralValue::True => write!(out, "true"),
            LiteralValue::False => write!(out, "false"),
            LiteralValue::Nil => write!(out, "nil"),
            LiteralValue::Str(s) => write!(out, "{}", s),
            // Whole numbers keep one decimal place: 3 → 3.0
            LiteralValue::Number(n) if n.fract() == 0.0 => write!(out, "{:.1}", n),
            LiteralValue::Number(n) => write!(out, "{}", n),
        };
    }
}
