use std::fmt;

use super::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'src> {
    Number(Number),
    Id(&'src str),
    Op(Operator),

    LParen,
    RParen,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "number `{v}`"),
            Self::Id(id) => write!(f, "identifier `{id}`"),
            Self::Op(op) => write!(f, "`{}`", op.symbol()),
            Self::LParen => write!(f, "`(`"),
            Self::RParen => write!(f, "`)`"),
        }
    }
}
