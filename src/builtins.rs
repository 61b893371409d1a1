use crate::value::*;
use lazy_static::lazy_static;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
}

impl Operator {
    pub fn function(self) -> Function {
        match self {
            Self::Add => Function::new("+", add),
            Self::Sub => Function::new("-", sub),
            Self::Mul => Function::new("*", mul),
            Self::Div => Function::new("/", div),
        }
    }

    fn apply_integer(self, acc: i64, n: i64) -> Result<i64> {
        let result = match self {
            Self::Add => acc.checked_add(n),
            Self::Sub => acc.checked_sub(n),
            Self::Mul => acc.checked_mul(n),
            Self::Div => {
                if n == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc.checked_div(n)
            }
        };
        result.ok_or(EvalError::IntegerOverflow { op: self })
    }

    fn apply_float(self, acc: f64, x: f64) -> Result<f64> {
        Ok(match self {
            Self::Add => acc + x,
            Self::Sub => acc - x,
            Self::Mul => acc * x,
            Self::Div => {
                if x == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc / x
            }
        })
    }
}

fn add(args: Vec<Value>) -> Result<Value> {
    fold(Operator::Add, args)
}

fn sub(args: Vec<Value>) -> Result<Value> {
    fold(Operator::Sub, args)
}

fn mul(args: Vec<Value>) -> Result<Value> {
    fold(Operator::Mul, args)
}

fn div(args: Vec<Value>) -> Result<Value> {
    fold(Operator::Div, args)
}

/// Left fold over `args`, seeded with the first argument. Every argument
/// must carry the first argument's tag.
fn fold(op: Operator, args: Vec<Value>) -> Result<Value> {
    let mut args = args.into_iter();
    let first = args.next().ok_or(EvalError::NoArguments { op })?;
    let expected = first.tag();

    args.try_fold(first, |acc, operand| {
        if operand.tag() != expected {
            return Err(EvalError::TypeMismatch {
                op,
                left: expected,
                right: operand.tag(),
            });
        }

        match (acc, operand) {
            (Value::Integer(acc), Value::Integer(n)) => {
                Ok(op.apply_integer(acc.value(), n.value())?.into())
            }
            (Value::Float(acc), Value::Float(x)) => Ok(op.apply_float(acc, x)?.into()),
            (Value::String(acc), Value::String(s)) if op == Operator::Add => {
                Ok(Value::String(concat_quoted(&acc, &s)))
            }
            _ => Err(EvalError::UnsupportedOperation { op, tag: expected }),
        }
    })
}

/// Joins two quoted strings, dropping the closing quote of `left` and the
/// opening quote of `right`.
fn concat_quoted(left: &str, right: &str) -> String {
    let left = left.strip_suffix(is_quote).unwrap_or(left);
    let right = right.strip_prefix(is_quote).unwrap_or(right);
    format!("{}{}", left, right)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

lazy_static! {
    pub static ref BUILTINS: HashMap<String, Value> = Operator::iter()
        .map(|op| (op.to_string(), Value::from(op.function())))
        .collect();
}
