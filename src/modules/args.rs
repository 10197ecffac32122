//! Tokenizer for raw `key=value` module argument strings
//!
//! Tokens are separated by whitespace, except whitespace inside a matched pair
//! of single or double quotes. A value that opens with a quote runs to the
//! matching quote of the same kind and is stored without the enclosing quotes.
//! There is no escape handling and no variable expansion.

use crate::modules::error::ModuleError;
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

/// Parsed module parameters keyed by argument name
pub type ModuleParams = HashMap<String, String>;

/// Parse a raw argument string into module parameters.
///
/// An empty (or all-whitespace) string yields an empty map. Any malformed
/// token fails the whole parse; no partial map is returned.
pub fn parse_args(raw: &str) -> Result<ModuleParams, ModuleError> {
    let mut params = ModuleParams::new();
    let mut scanner = ArgScanner::new(raw);

    while let Some(token) = scanner.next_token()? {
        params.insert(token.key, token.value);
    }

    Ok(params)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Key,
    /// Directly after the `=`
    ValueStart,
    Value,
    /// Value opened with this quote character
    Quoted(char),
    /// Quote opened inside an unquoted value, kept verbatim
    Inline(char),
    /// Closing quote of a quoted value consumed
    Closed,
}

#[derive(Debug)]
struct ArgToken {
    key: String,
    value: String,
}

struct ArgScanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> ArgScanner<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            chars: raw.chars().peekable(),
        }
    }

    fn next_token(&mut self) -> Result<Option<ArgToken>, ModuleError> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}

        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let mut raw = String::new();
        let mut key = String::new();
        let mut value = String::new();
        let mut state = ScanState::Key;
        let mut failure: Option<&'static str> = None;

        while let Some(&c) = self.chars.peek() {
            let in_quotes = matches!(state, ScanState::Quoted(_) | ScanState::Inline(_));
            if c.is_whitespace() && (!in_quotes || failure.is_some()) {
                break;
            }
            self.chars.next();
            raw.push(c);

            // Keep consuming so the error reports the whole token
            if failure.is_some() {
                continue;
            }

            state = match (state, c) {
                (ScanState::Key, '=') if key.is_empty() => {
                    failure = Some("empty key");
                    continue;
                }
                (ScanState::Key, '=') => ScanState::ValueStart,
                (ScanState::Key, '\'' | '"') => {
                    failure = Some("quote character in key");
                    continue;
                }
                (ScanState::Key, c) => {
                    key.push(c);
                    ScanState::Key
                }
                (ScanState::ValueStart, q @ ('\'' | '"')) => ScanState::Quoted(q),
                (ScanState::ValueStart | ScanState::Value, '=') => {
                    failure = Some("more than one unquoted '='");
                    continue;
                }
                (ScanState::Value, q @ ('\'' | '"')) => {
                    value.push(q);
                    ScanState::Inline(q)
                }
                (ScanState::ValueStart | ScanState::Value, c) => {
                    value.push(c);
                    ScanState::Value
                }
                (ScanState::Quoted(q), c) if c == q => ScanState::Closed,
                (ScanState::Quoted(q), c) => {
                    value.push(c);
                    ScanState::Quoted(q)
                }
                (ScanState::Inline(q), c) => {
                    value.push(c);
                    if c == q {
                        ScanState::Value
                    } else {
                        ScanState::Inline(q)
                    }
                }
                (ScanState::Closed, _) => {
                    failure = Some("unexpected characters after closing quote");
                    continue;
                }
            };
        }

        if let Some(reason) = failure {
            return Err(ModuleError::invalid_argument(&raw, reason));
        }

        match state {
            ScanState::Key => Err(ModuleError::invalid_argument(&raw, "missing '='")),
            ScanState::Quoted(_) | ScanState::Inline(_) => {
                Err(ModuleError::invalid_argument(&raw, "unterminated quote"))
            }
            ScanState::ValueStart | ScanState::Value | ScanState::Closed => {
                Ok(Some(ArgToken { key, value }))
            }
        }
    }
}
