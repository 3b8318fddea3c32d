use crate::syntax::{Expression, Function};

/// Structural check of an expression tree: binary nodes have two
/// well-formed children, calls name a known function, and no Unsupported
/// node appears anywhere.
pub fn is_well_formed(expr: &Expression) -> bool {
    match expr {
        Expression::Const(_) | Expression::Var(_) => true,
        Expression::Add(lhs, rhs)
        | Expression::Multiply(lhs, rhs)
        | Expression::Divide(lhs, rhs)
        | Expression::Exponent(lhs, rhs) => is_well_formed(lhs) && is_well_formed(rhs),
        Expression::Call { id, arg } => Function::is_known(id) && is_well_formed(arg),
        Expression::Unsupported(_) => false,
    }
}
