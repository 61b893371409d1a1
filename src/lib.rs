mod builtins;
mod environment;
pub mod evaluator;
mod lexer;
pub mod printer;
pub mod reader;
pub mod repl;
mod value;

pub use builtins::{Operator, BUILTINS};
pub use environment::Environment;
pub use evaluator::eval;
pub use lexer::{tokenize, Tokens};
pub use printer::{pr_str as print, PrintError};
pub use reader::{read_str as read, ReadError};
pub use value::{EvalError, Function, Integer, NativeFn, Tag, Value};
