use std::fmt::{self, Debug, Formatter};
use strum_macros::{Display, EnumDiscriminants};

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Signature shared by every native function.
pub type NativeFn = fn(Vec<Value>) -> Result<Value>;

/// A runtime datum. Lists own their elements, so every value is an
/// independent tree.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(Tag))]
pub enum Value {
    List(Vec<Value>),
    Function(Function),
    Integer(Integer),
    Float(f64),
    String(String),
    Symbol(String),
    Bool(bool),
    Nil,
}

impl Default for Value {
    fn default() -> Self {
        Self::Nil
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl Value {
    /// String values keep their delimiting quotes, as captured from source.
    pub fn string(raw: &str) -> Self {
        Self::String(raw.to_owned())
    }

    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_owned())
    }

    pub fn tag(&self) -> Tag {
        Tag::from(self)
    }

    pub fn is_function(&self) -> bool {
        match self {
            Self::Function(_) => true,
            _ => false,
        }
    }
}

/// An integer together with the text it was written as. Equality looks at
/// the magnitude only.
#[derive(Debug, Clone)]
pub struct Integer {
    value: i64,
    text: String,
}

impl Integer {
    /// Parses an optionally negative run of ASCII digits. Returns `None` for
    /// anything else, including digit runs that overflow `i64`.
    pub fn parse(text: &str) -> Option<Self> {
        if !is_integer(text) {
            return None;
        }
        let value = text.parse().ok()?;
        Some(Self {
            value,
            text: text.to_owned(),
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Integer {}

pub fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    func: NativeFn,
}

impl Function {
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Vec<Value>) -> Result<Value> {
        (self.func)(args)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Function<{}>", self.name)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}
