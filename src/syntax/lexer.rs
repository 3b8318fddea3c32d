use std::{iter::Peekable, str::CharIndices};

use super::{
    token::{Operator, Token},
    Number,
};
use crate::error::{ErrorKind, PResult};

/// Lazy scanner over an expression source. Cloning a lexer yields an
/// independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.eat_while(char::is_whitespace);

        let token = match self.chars.next()? {
            (off, c) if c.is_ascii_digit() => match self.read_number(off) {
                Ok(token) => token,
                Err(why) => return Some(Err(why)),
            },
            (off, c) if Self::is_id_start(c) => self.read_id(off),
            (_, '+') => Token::Op(Operator::Plus),
            (_, '-') => Token::Op(Operator::Minus),
            (_, '*') => Token::Op(Operator::Mul),
            (_, '/') => Token::Op(Operator::Div),
            (_, '^') => Token::Op(Operator::Pow),
            (_, '(') => Token::LParen,
            (_, ')') => Token::RParen,
            (pos, ch) => return Some(Err(ErrorKind::LexicalError { ch, pos })),
        };

        log::trace!("token: {token:?}");
        Some(Ok(token))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(off, _)) => off,
            None => self.src.len(),
        }
    }

    fn eat_while<P>(&mut self, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(_, c)) = self.chars.peek() {
            if !predicate(c) {
                return;
            }
            self.bump();
        }
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        self.eat_while(|c| c.is_ascii_digit());

        let is_float = matches!(self.chars.peek(), Some((_, '.')));
        if is_float {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }

        let s = &self.src[from_off..self.offset()];
        if !is_float {
            if let Ok(v) = s.parse::<i64>() {
                return Ok(Token::Number(Number::Int(v)));
            }
        }

        // Integers too wide for i64 fall back to a float
        let v = s
            .parse::<f64>()
            .expect("Failed to parse number. (This should never happen)");
        if !v.is_finite() {
            return Err(ErrorKind::NumberOutOfRange {
                literal: s.to_string(),
                pos: from_off,
            });
        }

        Ok(Token::Number(Number::Float(v)))
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        self.eat_while(Self::is_id_part);
        Token::Id(&self.src[from_off..self.offset()])
    }

    fn is_id_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}

/// Scans the whole source, failing on the first unrecognised character.
pub fn tokenize(src: &str) -> PResult<Vec<Token<'_>>> {
    Lexer::new(src).collect()
}
