use crate::reader::ReadError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    // Leading whitespace and commas are separators. The captured token is, in
    // order: the splice marker, a special character, a possibly unterminated
    // string, a comment, or a run of symbol characters.
    static ref TOKEN_RE: Regex = Regex::new(
        r#"[\s,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\s\[\]{}('"`,;)]*)"#
    )
    .unwrap();
}

/// Cursor over the tokens of one source string.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokens {
    tokens: Vec<String>,
    position: usize,
}

impl Tokens {
    pub fn peek(&self) -> Result<&str, ReadError> {
        self.tokens
            .get(self.position)
            .map(String::as_str)
            .ok_or(ReadError::EndOfStream)
    }

    pub fn next_token(&mut self) -> Result<String, ReadError> {
        let token = self.peek()?.to_owned();
        self.position += 1;
        Ok(token)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }
}

/// Splits `source` into tokens. Fails with `NoTokensFound` when the source
/// holds nothing but separators.
pub fn tokenize(source: &str) -> Result<Tokens, ReadError> {
    let tokens: Vec<String> = TOKEN_RE
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|token| token.as_str().trim())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();

    if tokens.is_empty() {
        return Err(ReadError::NoTokensFound);
    }

    trace!(?tokens, "tokenized");
    Ok(Tokens {
        tokens,
        position: 0,
    })
}
