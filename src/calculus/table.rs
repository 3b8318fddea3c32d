use crate::syntax::{Expression, Function};

/// `f'(u)` for each known function.
fn outer_derivative<'src>(func: Function, u: &Expression<'src>) -> Expression<'src> {
    use Expression as E;
    use Function::*;

    let u = u.clone();
    match func {
        Sin => E::apply(Cos, u),
        Cos => E::mul(E::num(-1), E::apply(Sin, u)),
        Exp => E::apply(Exp, u),
        Ln => E::div(E::num(1), u),
        Tan => E::pow(E::apply(Sec, u), E::num(2)),
        Sec => E::mul(E::apply(Tan, u.clone()), E::apply(Sec, u)),
        Sinh => E::apply(Cosh, u),
        Cosh => E::apply(Sinh, u),
        Csc => E::mul(
            E::num(-1),
            E::mul(E::apply(Cot, u.clone()), E::apply(Csc, u)),
        ),
        Cot => E::mul(E::num(-1), E::pow(E::apply(Csc, u), E::num(2))),
        Arcsin => E::pow(one_minus_square(u), E::num(-0.5)),
        Arccos => E::mul(E::num(-1), E::pow(one_minus_square(u), E::num(-0.5))),
        Arctan => E::pow(
            E::add(E::num(1), E::pow(u, E::num(2))),
            E::num(-1),
        ),
    }
}

// 1 - u^2, spelled the way the parser would desugar it
fn one_minus_square(u: Expression<'_>) -> Expression<'_> {
    Expression::sub(Expression::num(1), Expression::pow(u, Expression::num(2)))
}

/// Chain rule: `d/dx f(u) = f'(u) * du`.
pub(super) fn chain_rule<'src>(
    func: Function,
    u: &Expression<'src>,
    du: Expression<'src>,
) -> Expression<'src> {
    log::trace!("chain rule through {}", func.name());
    Expression::mul(outer_derivative(func, u), du)
}
