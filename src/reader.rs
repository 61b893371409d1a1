use crate::lexer::{self, Tokens};
use crate::value::{is_integer, Integer, Value};
use custom_error::custom_error;
use tracing::debug;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ReadError

    NoTokensFound = "no tokens found",
    EndOfStream = "unexpected end of token stream",
    UnterminatedList = "\")\" missing in list declaration; unexpectedly found end of token stream",
    UnknownAtom{token: String} = "unknown atomic type token: \"{token}\"",
    IntegerOutOfRange{token: String} = "integer literal out of range: \"{token}\"",
    TooDeeplyNested = "lists nested deeper than the reader supports",
}

/// Deepest list nesting the reader accepts. Reading and evaluating both
/// recurse once per level.
pub static MAX_DEPTH: usize = 256;

const SYMBOL_PUNCTUATION: &str = "!+-=/*";

/// Reads the first form in `source`. Returns `None` when the source holds no
/// form: it is empty, blank, or starts with a comment.
pub fn read_str(source: &str) -> Result<Option<Value>, ReadError> {
    let tokens = match lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(ReadError::NoTokensFound) => return Ok(None),
        Err(err) => return Err(err),
    };

    let form = Reader::new(tokens).read_form()?;
    debug!(?form, "read");
    Ok(form)
}

pub struct Reader {
    tokens: Tokens,
    depth: usize,
}

impl Reader {
    pub fn new(tokens: Tokens) -> Self {
        Self { tokens, depth: 0 }
    }

    /// Reads one form. Tokens after it are left unread.
    pub fn read_form(&mut self) -> Result<Option<Value>, ReadError> {
        let token = self.tokens.peek()?;

        if token.starts_with('(') {
            self.read_list().map(Some)
        } else if token.starts_with(';') {
            Ok(None)
        } else {
            self.read_atom().map(Some)
        }
    }

    // Every iteration consumes at least one token, so the loop ends once the
    // stream runs out.
    fn read_list(&mut self) -> Result<Value, ReadError> {
        self.tokens.next_token()?;

        if self.depth >= MAX_DEPTH {
            return Err(ReadError::TooDeeplyNested);
        }
        self.depth += 1;

        let mut list = vec![];
        loop {
            let token = self
                .tokens
                .peek()
                .map_err(|_| ReadError::UnterminatedList)?;

            if token.starts_with(')') {
                self.tokens.next_token()?;
                self.depth -= 1;
                return Ok(Value::List(list));
            }

            if token.starts_with(';') {
                self.tokens.next_token()?;
                continue;
            }

            if let Some(form) = self.read_form()? {
                list.push(form);
            }
        }
    }

    fn read_atom(&mut self) -> Result<Value, ReadError> {
        let token = self.tokens.next_token()?;

        if is_integer(&token) {
            return match Integer::parse(&token) {
                Some(n) => Ok(Value::Integer(n)),
                None => Err(ReadError::IntegerOutOfRange { token }),
            };
        }

        if token.starts_with('"') || token.starts_with('\'') {
            return Ok(Value::String(token));
        }

        if token == "nil" {
            return Ok(Value::Nil);
        }

        if is_symbol(&token) {
            return Ok(Value::Symbol(token));
        }

        Err(ReadError::UnknownAtom { token })
    }
}

fn is_symbol(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SYMBOL_PUNCTUATION.contains(c))
}
