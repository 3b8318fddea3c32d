use super::{Function, Number};

/// Expression tree. Every node owns its children; trees are never mutated
/// after construction.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression<'src> {
    Const(Number),
    Var(&'src str),
    Add(Box<Expression<'src>>, Box<Expression<'src>>),
    Multiply(Box<Expression<'src>>, Box<Expression<'src>>),
    Divide(Box<Expression<'src>>, Box<Expression<'src>>),
    Exponent(Box<Expression<'src>>, Box<Expression<'src>>),
    Call {
        id: &'src str,
        arg: Box<Expression<'src>>,
    },
    /// Produced only by the differentiation engine, wrapping the subtree it
    /// could not classify.
    Unsupported(Box<Expression<'src>>),
}

impl<'src> Expression<'src> {
    pub fn num(v: impl Into<Number>) -> Self {
        Self::Const(v.into())
    }

    pub fn var(id: &'src str) -> Self {
        Self::Var(id)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Self::Multiply(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Self, rhs: Self) -> Self {
        Self::Divide(Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(base: Self, power: Self) -> Self {
        Self::Exponent(Box::new(base), Box::new(power))
    }

    pub fn call(id: &'src str, arg: Self) -> Self {
        Self::Call {
            id,
            arg: Box::new(arg),
        }
    }

    pub fn apply(func: Function, arg: Self) -> Self {
        Self::call(func.name(), arg)
    }

    pub fn unsupported(original: Self) -> Self {
        Self::Unsupported(Box::new(original))
    }

    /// `a - b` desugars to `a + (-1 * b)`.
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        Self::add(lhs, Self::mul(Self::num(-1), rhs))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Const(v) if v.is_zero())
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    pub fn contains_unsupported(&self) -> bool {
        self.first_unsupported().is_some()
    }

    /// The original subtree wrapped by the leftmost Unsupported node.
    pub fn first_unsupported(&self) -> Option<&Expression<'src>> {
        match self {
            Self::Unsupported(original) => Some(original.as_ref()),
            Self::Const(_) | Self::Var(_) => None,
            Self::Call { arg, .. } => arg.first_unsupported(),
            Self::Add(lhs, rhs)
            | Self::Multiply(lhs, rhs)
            | Self::Divide(lhs, rhs)
            | Self::Exponent(lhs, rhs) => lhs
                .first_unsupported()
                .or_else(|| rhs.first_unsupported()),
        }
    }
}
