use std::{iter::Peekable, vec::IntoIter};

use crate::{
    error::{ErrorKind, PResult},
    syntax::{
        lexer::tokenize,
        token::{Operator, Token},
        Expression,
    },
};

/// Recursive-descent parser over an already scanned token stream.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := atom ('^' atom)*
/// atom       := NUMBER | '-' NUMBER
///             | IDENTIFIER '(' expression ')' | IDENTIFIER | '(' expression ')'
/// ```
///
/// A `-` directly in front of a number is a negative literal, so rendered
/// expressions such as `(-1 * x)` or `(x^-0.5)` parse back. There is no
/// general unary minus.
///
/// Every binary level, `^` included, associates to the left.
pub struct Parser<'src> {
    tokens: Peekable<IntoIter<Token<'src>>>,
}

impl<'src> Parser<'src> {
    pub fn from_tokens(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    pub fn new(src: &'src str) -> PResult<Self> {
        Ok(Self::from_tokens(tokenize(src)?))
    }

    /// Parses one expression and requires the token stream to be exhausted.
    pub fn parse_expression(&mut self) -> PResult<Expression<'src>> {
        let expr = self.parse_sum()?;

        if let Some(token) = self.tokens.next() {
            return Err(ErrorKind::syntax("end of input", token.to_string()));
        }

        log::debug!("parsed: {expr:?}");
        Ok(expr)
    }

    fn parse_sum(&mut self) -> PResult<Expression<'src>> {
        let mut lhs = self.parse_term()?;

        while let Some(op @ (Operator::Plus | Operator::Minus)) = self.peek_op() {
            self.bump();
            let rhs = self.parse_term()?;

            lhs = match op {
                Operator::Plus => Expression::add(lhs, rhs),
                _ => Expression::sub(lhs, rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult<Expression<'src>> {
        let mut lhs = self.parse_factor()?;

        while let Some(op @ (Operator::Mul | Operator::Div)) = self.peek_op() {
            self.bump();
            let rhs = self.parse_factor()?;

            lhs = match op {
                Operator::Mul => Expression::mul(lhs, rhs),
                _ => Expression::div(lhs, rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> PResult<Expression<'src>> {
        let mut lhs = self.parse_atom()?;

        while let Some(Operator::Pow) = self.peek_op() {
            self.bump();
            let rhs = self.parse_atom()?;
            lhs = Expression::pow(lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_atom(&mut self) -> PResult<Expression<'src>> {
        match self.tokens.next() {
            None => Err(ErrorKind::syntax("expression", "EOF")),
            Some(Token::Number(v)) => Ok(Expression::Const(v)),
            Some(Token::Op(Operator::Minus)) => match self.tokens.next() {
                Some(Token::Number(v)) => Ok(Expression::Const(-v)),
                Some(other) => Err(ErrorKind::syntax("number", other.to_string())),
                None => Err(ErrorKind::syntax("number", "EOF")),
            },
            Some(Token::Id(id)) => match self.tokens.peek() {
                Some(Token::LParen) => {
                    self.bump();
                    self.parse_call_expr(id)
                }
                _ => Ok(Expression::Var(id)),
            },
            Some(Token::LParen) => self.parse_grouping_expr(),
            Some(other) => Err(ErrorKind::syntax("expression", other.to_string())),
        }
    }

    // Any identifier may be called; whether it is a known function is
    // checked by the validator and the differentiation engine.
    fn parse_call_expr(&mut self, id: &'src str) -> PResult<Expression<'src>> {
        let arg = self.parse_sum()?;
        self.expect(Token::RParen)?;
        Ok(Expression::call(id, arg))
    }

    fn parse_grouping_expr(&mut self) -> PResult<Expression<'src>> {
        let expr = self.parse_sum()?;
        self.expect(Token::RParen)?;
        Ok(expr)
    }

    fn peek_op(&mut self) -> Option<Operator> {
        match self.tokens.peek() {
            Some(Token::Op(op)) => Some(*op),
            _ => None,
        }
    }

    #[inline(always)]
    fn bump(&mut self) {
        let _ = self.tokens.next();
    }

    fn expect(&mut self, expected: Token) -> PResult<()> {
        match self.tokens.next() {
            None => Err(ErrorKind::syntax(expected.to_string(), "EOF")),
            Some(token) => {
                if token == expected {
                    return Ok(());
                }
                Err(ErrorKind::syntax(expected.to_string(), token.to_string()))
            }
        }
    }
}

pub fn parse(tokens: Vec<Token<'_>>) -> PResult<Expression<'_>> {
    Parser::from_tokens(tokens).parse_expression()
}

/// Tokenizes and parses `src` in one step.
pub fn parse_str(src: &str) -> PResult<Expression<'_>> {
    Parser::new(src)?.parse_expression()
}
