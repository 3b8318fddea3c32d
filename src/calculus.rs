mod diff;
mod table;

pub use diff::differentiate;

use crate::syntax::Expression;

/// Result of differentiating an expression, separating derivatives the
/// engine fully understood from those that contain Unsupported nodes.
#[derive(Debug, PartialEq, Clone)]
pub enum Derivative<'src> {
    Supported(Expression<'src>),
    Unsupported {
        /// The derivative as far as it could be computed.
        partial: Expression<'src>,
        /// The leftmost subtree the engine could not classify.
        culprit: Expression<'src>,
    },
}

impl<'src> Derivative<'src> {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    pub fn expression(&self) -> &Expression<'src> {
        match self {
            Self::Supported(expr) => expr,
            Self::Unsupported { partial, .. } => partial,
        }
    }

    pub fn into_expression(self) -> Expression<'src> {
        match self {
            Self::Supported(expr) => expr,
            Self::Unsupported { partial, .. } => partial,
        }
    }
}

/// Differentiates `expr`, reporting explicitly whether any part of it was
/// unsupported.
pub fn derive<'src>(expr: &Expression<'src>) -> Derivative<'src> {
    let derivative = differentiate(expr);
    let culprit = derivative.first_unsupported().cloned();

    match culprit {
        None => Derivative::Supported(derivative),
        Some(culprit) => Derivative::Unsupported {
            partial: derivative,
            culprit,
        },
    }
}
