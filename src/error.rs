use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ErrorKind {
    #[error("Unexpected character `{ch}` at offset {pos}")]
    LexicalError { ch: char, pos: usize },
    #[error("Number `{literal}` at offset {pos} is too large")]
    NumberOutOfRange { literal: String, pos: usize },
    #[error("Expected {expected}, found {found}")]
    SyntaxError { expected: String, found: String },
}

impl ErrorKind {
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::LexicalError { .. } | Self::NumberOutOfRange { .. }
        )
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::SyntaxError { .. })
    }

    pub(crate) fn syntax(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::SyntaxError {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type PResult<T> = Result<T, ErrorKind>;
