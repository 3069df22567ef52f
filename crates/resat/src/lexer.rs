//! Lexer implementation.

use logos::Logos;
use std::fmt;

// 入力のトークン列
#[derive(Debug, Copy, Clone, Logos, PartialEq, Eq)]
#[logos(skip r"[^0-9A-Za-z+*/()\-]+")]
pub enum Token<'source> {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[regex(r"[0-9]+")]
    Num(&'source str),

    #[regex(r"[A-Za-z]+")]
    Ident(&'source str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Num(s) | Self::Ident(s) => f.write_str(s),
        }
    }
}

/// Split the input into tokens.
///
/// Characters that start no token are dropped, so this never fails.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Token::lexer(input);
    let mut tokens = vec![];
    while let Some(res) = lexer.next() {
        match res {
            Ok(tok) => tokens.push(tok),
            Err(()) => tracing::trace!("skip unrecognized input {:?}", lexer.slice()),
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    #[test]
    fn smoketest() {
        let tokens = tokenize("foo + 12*(bar - 3) / x");
        assert!(matches!(
            dbg!(&tokens[..]),
            [
                Ident("foo"),
                Plus,
                Num("12"),
                Star,
                LParen,
                Ident("bar"),
                Minus,
                Num("3"),
                RParen,
                Slash,
                Ident("x"),
            ]
        ));
    }

    #[test]
    fn longest_runs() {
        let tokens = tokenize("abc123def");
        assert_eq!(tokens, [Ident("abc"), Num("123"), Ident("def")]);
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let tokens = tokenize("7 % 3 ; x_y\t\n== é");
        assert_eq!(tokens, [Num("7"), Num("3"), Ident("x"), Ident("y")]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?? ").is_empty());
    }

    #[test]
    fn display_source_text() {
        let rendered: Vec<String> = tokenize("(a1+*)-/").iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, ["(", "a", "1", "+", "*", ")", "-", "/"]);
    }
}
