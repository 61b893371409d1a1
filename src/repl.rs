use crate::builtins::BUILTINS;
use crate::environment::Environment;
use crate::evaluator;
use crate::printer::{self, PrintError};
use crate::reader::{self, ReadError};
use crate::value::EvalError;
use custom_error::custom_error;
use std::io::{self, BufRead, Write};
use tracing::debug;

static PROMPT: &str = "user> ";

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ReplError

    Syntax{source: ReadError} = "Syntax error: {source}",
    Eval{source: EvalError} = "Eval error: {source}",
    Print{source: PrintError} = "String representation error: {source}",
}

/// The environment a session starts with: the arithmetic builtins.
pub fn default_environment() -> Environment {
    BUILTINS
        .iter()
        .map(|(name, func)| (name.clone(), func.clone()))
        .collect()
}

/// Reads, evaluates and prints one line. `None` means the line held no form.
pub fn rep(line: &str, env: &Environment) -> Result<Option<String>, ReplError> {
    let ast = match reader::read_str(line)? {
        Some(ast) => ast,
        None => return Ok(None),
    };
    let value = evaluator::eval(ast, Some(env))?;
    Ok(Some(printer::pr_str(&value)?))
}

/// Runs the loop until `input` fails. Running out of input counts as a
/// failure.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    env: &Environment,
) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
        }

        match rep(&line, env) {
            Ok(Some(text)) => writeln!(output, "{}", text)?,
            Ok(None) => {}
            Err(err) => {
                debug!(%err, "recoverable error");
                writeln!(output, "{}", err)?
            }
        }
    }
}

pub fn start() -> io::Result<()> {
    let env = default_environment();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), &mut stdout.lock(), &env)
}
