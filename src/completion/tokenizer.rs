//! Input-line tokenizer with one level of quoting
//!
//! Command lines are split on spaces into a structured token list. Exactly
//! one layer of double quotes is understood: a token starting with `"` runs
//! to the closing quote and may contain spaces. There is no escaping and no
//! nesting; an unterminated quote is tolerated by taking the rest of the
//! line as the token (best effort, never an error).
//!
//! The trailing-space flag distinguishes "argument finished, next one
//! empty" from "still typing the last argument", which the path matcher
//! needs to decide rule applicability.

/// One token of the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text with the surrounding quotes stripped
    pub text: String,
    /// Whether the token was quoted in the input
    pub quoted: bool,
}

/// Structured view of a tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// Whether the line ends in a space outside any quote
    pub trailing_space: bool,
}

impl TokenLine {
    /// The first token's text, if any
    pub fn leading(&self) -> Option<&str> {
        self.tokens.first().map(|t| t.text.as_str())
    }

    /// Check whether the first tokens equal `path` exactly (case-sensitive)
    pub fn starts_with_path(&self, path: &[String]) -> bool {
        self.tokens.len() >= path.len()
            && self
                .tokens
                .iter()
                .zip(path)
                .all(|(token, literal)| token.text == *literal)
    }
}

/// Split an input line into tokens
///
/// # Arguments
/// * `input` - The raw input line
///
/// # Returns
/// * `TokenLine` - Tokens plus the trailing-space flag
pub fn tokenize(input: &str) -> TokenLine {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut trailing_space = false;

    while let Some(&c) = chars.peek() {
        if c == ' ' {
            chars.next();
            trailing_space = true;
            continue;
        }
        trailing_space = false;

        if c == '"' {
            chars.next();
            let mut text = String::new();
            for ch in chars.by_ref() {
                if ch == '"' {
                    break;
                }
                text.push(ch);
            }
            tokens.push(Token { text, quoted: true });
        } else {
            let mut text = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == ' ' {
                    break;
                }
                text.push(ch);
                chars.next();
            }
            tokens.push(Token {
                text,
                quoted: false,
            });
        }
    }

    TokenLine {
        tokens,
        trailing_space,
    }
}

/// Reinsert one layer of quoting around a candidate that needs it
///
/// # Arguments
/// * `candidate` - Completion result about to be placed into the line
///
/// # Returns
/// * `String` - The candidate, quoted if it contains a space
pub fn quote_if_needed(candidate: &str) -> String {
    if candidate.contains(' ') {
        format!("\"{candidate}\"")
    } else {
        candidate.to_string()
    }
}
