use crate::environment::Environment;
use crate::value::{EvalError, Result, Value};
use tracing::{debug, trace};

/// Evaluates `ast` against `env`. Fails with `NilEnvironment` when no
/// environment is supplied.
pub fn eval(ast: Value, env: Option<&Environment>) -> Result<Value> {
    let env = env.ok_or(EvalError::NilEnvironment)?;
    eval_value(ast, env)
}

// Recursion depth follows list nesting, which the reader bounds.
fn eval_value(ast: Value, env: &Environment) -> Result<Value> {
    match ast {
        Value::Symbol(name) => {
            trace!(%name, "resolving symbol");
            env.get(&name).ok_or(EvalError::UnboundSymbol { name })
        }
        Value::List(items) if !items.is_empty() => eval_list(items, env),
        atom => Ok(atom),
    }
}

fn eval_list(items: Vec<Value>, env: &Environment) -> Result<Value> {
    let mut evaluated = items
        .into_iter()
        .map(|item| eval_value(item, env))
        .collect::<Result<Vec<_>>>()?;

    match evaluated.first() {
        Some(Value::Function(func)) => {
            let func = *func;
            let args = evaluated.split_off(1);
            debug!(function = func.name(), args = args.len(), "applying");
            func.call(args)
        }
        _ => Ok(Value::List(evaluated)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builtins::Operator;
    use crate::printer::pr_str;
    use crate::reader::read_str;
    use crate::repl::default_environment as builtin_env;
    use crate::value::Tag;
    use pretty_assertions::assert_eq;

    fn test_eval(input: &str) -> Result<Value> {
        let ast = read_str(input)
            .expect("Parse errors found")
            .expect("No form found");
        eval(ast, Some(&builtin_env()))
    }

    fn test_print(input: &str) -> String {
        let value = test_eval(input).expect("Eval errors found");
        pr_str(&value).expect("No representation")
    }

    #[test]
    fn test_eval_arithmetic() {
        let cases = vec![
            ("(+ 1 2 3)", "6"),
            ("(* 2 3 4)", "24"),
            ("(- 10 3 2)", "5"),
            ("(/ 20 2 5)", "2"),
            ("(+ 5 (* 2 3))", "11"),
            ("(- (+ 5 (* 2 3)) 3)", "8"),
            ("(/ (- (+ 515 (* -87 311)) 296) 27)", "-994"),
            ("(+ -1 -2)", "-3"),
            ("(+ 1 2) (* 100 100)", "3"),
        ];

        for (input, output) in cases.into_iter() {
            crate::test_utils::init_test_logging();
            assert_eq!(test_print(input), output, "input: {:?}", input);
        }
    }

    #[test]
    fn test_eval_self_quoting() {
        let cases = vec![
            ("(1 2 3)", "(1 2 3)"),
            ("()", "()"),
            ("(1 (+ 1 1) 3)", "(1 2 3)"),
            ("((1) (+ 2 2))", "((1) 4)"),
            ("(nil 1)", "(nil 1)"),
            (r#"("a" "b")"#, r#"("a" "b")"#),
            ("nil", "nil"),
            ("7", "7"),
            (r#""text""#, r#""text""#),
        ];

        for (input, output) in cases.into_iter() {
            assert_eq!(test_print(input), output, "input: {:?}", input);
        }
    }

    #[test]
    fn test_eval_strings() {
        assert_eq!(test_print(r#"(+ "hello " "world")"#), r#""hello world""#);
    }

    #[test]
    fn test_eval_symbol_lookup() {
        match test_eval("+") {
            Ok(Value::Function(func)) => assert_eq!(func, Operator::Add.function()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_eval_errors() {
        let cases = vec![
            (
                "(foo 1 2)",
                EvalError::UnboundSymbol {
                    name: "foo".to_owned(),
                },
            ),
            (
                "(1 (+ 1 missing))",
                EvalError::UnboundSymbol {
                    name: "missing".to_owned(),
                },
            ),
            ("(/ 10 0)", EvalError::DivisionByZero),
            (
                r#"(+ 1 "a")"#,
                EvalError::TypeMismatch {
                    op: Operator::Add,
                    left: Tag::Integer,
                    right: Tag::String,
                },
            ),
            ("(+)", EvalError::NoArguments { op: Operator::Add }),
            (
                r#"(- "a" "b")"#,
                EvalError::UnsupportedOperation {
                    op: Operator::Sub,
                    tag: Tag::String,
                },
            ),
            (
                "(* (1) (2))",
                EvalError::UnsupportedOperation {
                    op: Operator::Mul,
                    tag: Tag::List,
                },
            ),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(test_eval(input), Err(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn test_eval_nil_environment() {
        assert_eq!(
            eval(Value::from(1i64), None),
            Err(EvalError::NilEnvironment)
        );
    }

    #[test]
    fn test_eval_leaves_environment_untouched() {
        let env = builtin_env();
        let before = env.clone();
        let ast = read_str("(+ 1 (* 2 3))").unwrap().unwrap();
        assert_eq!(eval(ast, Some(&env)), Ok(Value::from(7i64)));
        assert_eq!(env, before);
    }

    #[test]
    fn test_eval_atoms_are_self_evaluating() {
        let env = Environment::new();
        let cases = vec![
            Value::from(3i64),
            Value::from(2.5),
            Value::from(false),
            Value::string("\"s\""),
            Value::Nil,
            Value::List(vec![]),
            Value::from(Operator::Div.function()),
        ];

        for value in cases.into_iter() {
            assert_eq!(eval(value.clone(), Some(&env)), Ok(value));
        }
    }
}
