use std::fmt;

use crate::syntax::Expression;

/// Marker printed in place of a subtree the engine could not differentiate.
pub const UNSUPPORTED_MARKER: &str = "Not supported";

/// Fully parenthesized infix form: every binary operation gets its own
/// pair of parentheses.
impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(v) => write!(f, "{v}"),
            Self::Var(id) => write!(f, "{id}"),
            Self::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Self::Multiply(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Self::Divide(lhs, rhs) => write!(f, "({lhs} / {rhs})"),
            Self::Exponent(base, power) => write!(f, "({base}^{power})"),
            Self::Call { id, arg } => write!(f, "{id}({arg})"),
            Self::Unsupported(_) => f.write_str(UNSUPPORTED_MARKER),
        }
    }
}

pub fn render(expr: &Expression) -> String {
    expr.to_string()
}

#[cfg(test)]
mod test {
    use super::{render, UNSUPPORTED_MARKER};
    use crate::syntax::{parse_str, Expression as E};

    #[test]
    fn leaves() {
        assert_eq!(render(&E::num(3)), "3");
        assert_eq!(render(&E::num(0.5)), "0.5");
        assert_eq!(render(&E::num(-1)), "-1");
        assert_eq!(render(&E::var("x")), "x");
    }

    #[test]
    fn binary_operations() {
        let expr = parse_str("x + 2 * y ^ 3 / z").unwrap();
        assert_eq!(render(&expr), "(x + ((2 * (y^3)) / z))");
    }

    #[test]
    fn subtraction_is_desugared() {
        let expr = parse_str("x - 1").unwrap();
        assert_eq!(render(&expr), "(x + (-1 * 1))");
    }

    #[test]
    fn calls() {
        let expr = parse_str("sin(cos(x) + 1)").unwrap();
        assert_eq!(render(&expr), "sin((cos(x) + 1))");
    }

    #[test]
    fn unsupported_marker() {
        let expr = E::add(E::var("x"), E::unsupported(E::call("foo", E::var("x"))));
        assert_eq!(render(&expr), format!("(x + {UNSUPPORTED_MARKER})"));
    }
}
