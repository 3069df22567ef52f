//! Syntax definition.

use num_bigint::BigUint;
use std::fmt;

/// The binary operator of an interior node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Mul,
    /// An operator the rewrite rules know nothing about.
    Other(char),
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Mul => '*',
            Self::Other(c) => c,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An integer literal, kept as the digits it was written with.
///
/// Equality and display go by the digit text, so `007` stays `007` and is
/// neither equal to `7` nor matched by the identity rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: String,
    value: BigUint,
}

impl Literal {
    /// Build a literal from a non-empty run of ASCII digits.
    pub fn from_digits(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = BigUint::parse_bytes(text.as_bytes(), 10)?;
        Some(Self {
            text: text.to_owned(),
            value,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

/// Canonical decimal spelling of `value`.
impl From<BigUint> for Literal {
    fn from(value: BigUint) -> Self {
        Self {
            text: value.to_str_radix(10),
            value,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Literal(Literal),
    Ident(String),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{}", lit),
            Self::Ident(name) => f.write_str(name),
        }
    }
}

/// An expression tree.
///
/// Every interior node exclusively owns both of its children, and the derived
/// `PartialEq` is the order-sensitive structural equality: `a + b` and
/// `b + a` compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Atom(Atom),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// A literal in canonical decimal form.
    pub fn literal(n: impl Into<BigUint>) -> Self {
        Self::Atom(Atom::Literal(Literal::from(n.into())))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Atom(Atom::Ident(name.into()))
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Add, lhs, rhs)
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Mul, lhs, rhs)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Atom(Atom::Literal(lit)) => Some(lit),
            _ => None,
        }
    }

    /// Whether this is the literal written exactly `0`.
    pub fn is_zero(&self) -> bool {
        self.as_literal().map_or(false, |lit| lit.text() == "0")
    }

    /// Whether this is the literal written exactly `1`.
    pub fn is_one(&self) -> bool {
        self.as_literal().map_or(false, |lit| lit.text() == "1")
    }

    /// The operator of an interior node, or `None` for a leaf.
    pub fn op(&self) -> Option<BinOp> {
        match self {
            Self::Binary { op, .. } => Some(*op),
            Self::Atom(..) => None,
        }
    }

    /// Total number of nodes, leaves included.
    pub fn cost(&self) -> usize {
        match self {
            Self::Atom(..) => 1,
            Self::Binary { lhs, rhs, .. } => 1 + lhs.cost() + rhs.cost(),
        }
    }
}

/// Renders the fully parenthesized form, e.g. `((a * b) + c)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{}", atom),
            Self::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
