use crate::artifacts::tokens::TOKEN_REGEX;
use crate::artifacts::tokens::token::Token;
use derive_new::new;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_REGEX).expect("token pattern is a valid regex"));

/// Lazy token extraction over a borrowed text
///
/// Every maximal `[...]` region on a line is one token, read left to right.
/// Text outside brackets is ignored and a bracket never spans lines.
/// Iterating again restarts from the first line.
#[derive(Debug, Clone, Copy, new)]
pub struct Tokenizer<'t> {
    text: &'t str,
}

impl<'t> Tokenizer<'t> {
    /// Split on `\n`, `\r\n` and lone `\r`
    pub fn lines(self) -> impl Iterator<Item = &'t str> {
        self.text.split(['\n', '\r'])
    }

    pub fn tokens(self) -> impl Iterator<Item = Token> + 't {
        self.lines().flat_map(line_tokens)
    }
}

impl<'t> IntoIterator for Tokenizer<'t> {
    type Item = Token;
    type IntoIter = Box<dyn Iterator<Item = Token> + 't>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.tokens())
    }
}

pub fn line_tokens(line: &str) -> impl Iterator<Item = Token> + '_ {
    TOKEN_PATTERN
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|contents| Token::parse(contents.as_str()))
}
