//! Recursive descent parser.
//!
//! ```text
//! sum    := term ('+' term)*
//! term   := factor ('*' factor)*
//! factor := NUM | IDENT | '(' sum ')'
//! ```
//!
//! `-` and `/` are lexed but not part of the grammar. Parsing stops at the
//! first token that cannot continue the expression, and anything after it is
//! ignored.

use crate::{
    error::ParseError,
    lexer::{tokenize, Token},
    syntax::{Atom, BinOp, Expr, Literal},
};

/// Tokenize and parse the input.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input);
    parse_tokens(&tokens)
}

pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<Expr, ParseError> {
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_sum()?;
    if parser.pos < tokens.len() {
        tracing::trace!("ignore {} trailing token(s)", tokens.len() - parser.pos);
    }
    Ok(expr)
}

struct Parser<'t, 'source> {
    tokens: &'t [Token<'source>],
    pos: usize,
}

impl<'source> Parser<'_, 'source> {
    fn peek(&self) -> Option<Token<'source>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'source>> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_term()?;
        while let Some(Token::Plus) = self.peek() {
            self.pos += 1;
            tracing::trace!("reduce: sum -> sum `+' term");
            let rhs = self.parse_term()?;
            node = Expr::binary(BinOp::Add, node, rhs);
        }
        Ok(node)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;
        while let Some(Token::Star) = self.peek() {
            self.pos += 1;
            tracing::trace!("reduce: term -> term `*' factor");
            let rhs = self.parse_factor()?;
            node = Expr::binary(BinOp::Mul, node, rhs);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.bump() {
            Some(Token::Num(digits)) => {
                let lit = Literal::from_digits(digits)
                    .ok_or_else(|| ParseError::UnexpectedToken(digits.to_owned()))?;
                Ok(Expr::Atom(Atom::Literal(lit)))
            }
            Some(Token::Ident(name)) => Ok(Expr::ident(name)),
            Some(Token::LParen) => {
                let inner = self.parse_sum()?;
                match self.bump() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(ParseError::ExpectedRParen(tok.to_string())),
                    None => Err(ParseError::UnclosedParen),
                }
            }
            Some(tok) => Err(ParseError::UnexpectedToken(tok.to_string())),
            None => Err(ParseError::UnexpectedEoi),
        }
    }
}
