use super::Tag;
use crate::builtins::Operator;
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    NilEnvironment = "no environment provided",
    UnboundSymbol{name: String} = "symbol \"{name}\" definition not found in environment",
    TypeMismatch{op: Operator, left: Tag, right: Tag} = "operator \"{op}\" called with mismatched types: \"{left}\" and \"{right}\"",
    UnsupportedOperation{op: Operator, tag: Tag} = "operator \"{op}\" not supported on type \"{tag}\"",
    DivisionByZero = "division by zero",
    NoArguments{op: Operator} = "operator \"{op}\" called with no arguments",
    IntegerOverflow{op: Operator} = "integer overflow in operator \"{op}\"",
}
